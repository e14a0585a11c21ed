use crate::ast::Setting;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_till1},
    character::complete::{
        alpha1, alphanumeric1, anychar, char, line_ending, multispace0, none_of,
        not_line_ending, one_of, space0, space1,
    },
    combinator::{all_consuming, eof, map, opt, peek, recognize, value},
    multi::{fold_many0, many0, many0_count, many1_count, separated_list1},
    sequence::delimited,
};

const COMMENT_CHARACTERS: &str = "#;";
const LINE_COMMENT: &str = "//";

pub fn imports(input: &str) -> IResult<&str, Vec<&str>> {
    fold_many0(
        alt((map(import, Some), value(None, anychar))),
        Vec::new,
        |mut names, specifiers| {
            names.extend(
                specifiers
                    .into_iter()
                    .flatten()
                    .flat_map(split_specifier),
            );
            names
        },
    )
    .parse(input)
}

pub fn configuration(input: &str) -> IResult<&str, Vec<Setting<'_>>> {
    map(
        all_consuming((opt(line_break), many0(statement), blank)),
        |(_, statements, _)| statements.into_iter().flatten().collect(),
    )
    .parse(input)
}

fn import(input: &str) -> IResult<&str, Vec<&str>> {
    delimited(
        (tag("@import"), multispace0),
        separated_list1(import_separator, quoted_string),
        (space0, import_terminator),
    )
    .parse(input)
}

fn import_separator(input: &str) -> IResult<&str, ()> {
    value(
        (),
        (
            multispace0,
            char(','),
            multispace0,
            opt((tag(LINE_COMMENT), not_line_ending)),
            multispace0,
        ),
    )
    .parse(input)
}

fn import_terminator(input: &str) -> IResult<&str, ()> {
    alt((
        value((), char(';')),
        value((), peek(tag(LINE_COMMENT))),
        value((), peek(char('}'))),
        value((), peek(line_ending)),
        value((), eof),
    ))
    .parse(input)
}

fn quoted_string(input: &str) -> IResult<&str, &str> {
    alt((quoted('"'), quoted('\''))).parse(input)
}

fn quoted<'a>(
    quote: char,
) -> impl Parser<&'a str, Output = &'a str, Error = nom::error::Error<&'a str>> {
    delimited(
        char(quote),
        take_till1(move |character: char| character == quote || character.is_whitespace()),
        char(quote),
    )
}

fn split_specifier(specifier: &str) -> impl Iterator<Item = &str> {
    specifier
        .split(',')
        .map(|name| name.trim_matches(|character: char| character.is_whitespace() || character == ';'))
        .filter(|name| !name.is_empty())
}

fn statement(input: &str) -> IResult<&str, Option<Setting<'_>>> {
    alt((value(None, section), map(setting, Some))).parse(input)
}

fn section(input: &str) -> IResult<&str, ()> {
    value(
        (),
        (
            token(delimited(
                char('['),
                take_till1(|character: char| character == ']' || character == '\n'),
                char(']'),
            )),
            end_of_line,
        ),
    )
    .parse(input)
}

fn setting(input: &str) -> IResult<&str, Setting<'_>> {
    map(
        (identifier, sign('='), opt(string_line), end_of_line),
        |(key, _, value, _)| Setting::new(key, value.unwrap_or_default()),
    )
    .parse(input)
}

fn string_line(input: &str) -> IResult<&str, &str> {
    map(recognize(many1_count(none_of("\r\n"))), str::trim).parse(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    token(recognize((
        alt((alpha1, tag("_"))),
        many0_count(alt((alphanumeric1, tag("_")))),
    )))
    .parse(input)
}

fn sign<'a>(sign: char) -> impl Parser<&'a str, Output = (), Error = nom::error::Error<&'a str>> {
    value((), token(char(sign)))
}

fn token<'a, O>(
    mut parser: impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
) -> impl FnMut(&'a str) -> IResult<&'a str, O> {
    move |input| {
        let (input, _) = blank(input)?;

        parser.parse(input)
    }
}

fn end_of_line(input: &str) -> IResult<&str, ()> {
    alt((line_break, value((), (blank, eof)))).parse(input)
}

fn blank(input: &str) -> IResult<&str, ()> {
    value((), many0_count(alt((value((), space1), comment)))).parse(input)
}

fn comment(input: &str) -> IResult<&str, ()> {
    value((), (one_of(COMMENT_CHARACTERS), many0_count(none_of("\r\n")))).parse(input)
}

fn line_break(input: &str) -> IResult<&str, ()> {
    value((), many1_count((blank, line_ending))).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_no_imports() {
        assert_eq!(imports("").unwrap().1, Vec::<&str>::new());
        assert_eq!(
            imports("a { color: red; }\n").unwrap().1,
            Vec::<&str>::new()
        );
    }

    #[test]
    fn parse_import() {
        assert_eq!(imports("@import \"foo\";").unwrap().1, vec!["foo"]);
        assert_eq!(imports("@import 'foo';").unwrap().1, vec!["foo"]);
        assert_eq!(
            imports("@import \"partials/a\";\n").unwrap().1,
            vec!["partials/a"]
        );
    }

    #[test]
    fn parse_import_list() {
        assert_eq!(
            imports("@import \"foo\", 'bar';").unwrap().1,
            vec!["foo", "bar"]
        );
        assert_eq!(
            imports("@import \"foo\",\n        \"bar\";").unwrap().1,
            vec!["foo", "bar"]
        );
        assert_eq!(
            imports("@import \"foo,bar\";").unwrap().1,
            vec!["foo", "bar"]
        );
    }

    #[test]
    fn parse_import_list_with_comments() {
        assert_eq!(
            imports("@import \"foo\", // colors\n  \"bar\"; // layout\n")
                .unwrap()
                .1,
            vec!["foo", "bar"]
        );
    }

    #[test]
    fn parse_import_terminated_by_line_comment() {
        assert_eq!(
            imports("@import \"foo\" // legacy\n").unwrap().1,
            vec!["foo"]
        );
    }

    #[test]
    fn parse_import_without_semicolon() {
        assert_eq!(imports("@import \"foo\"").unwrap().1, vec!["foo"]);
        assert_eq!(imports("@import \"foo\"\n").unwrap().1, vec!["foo"]);
        assert_eq!(
            imports(".theme { @import \"foo\" }").unwrap().1,
            vec!["foo"]
        );
    }

    #[test]
    fn accumulate_imports_of_all_statements() {
        assert_eq!(
            imports("@import \"foo\";\na { color: red; }\n@import \"bar\", \"baz\";\n")
                .unwrap()
                .1,
            vec!["foo", "bar", "baz"]
        );
    }

    #[test]
    fn keep_css_imports() {
        assert_eq!(
            imports("@import \"bootstrap.css\";").unwrap().1,
            vec!["bootstrap.css"]
        );
    }

    #[test]
    fn skip_url_imports() {
        assert_eq!(
            imports("@import url(foo.css);\n@import \"bar\";").unwrap().1,
            vec!["bar"]
        );
    }

    #[test]
    fn skip_malformed_imports() {
        assert_eq!(imports("@import;").unwrap().1, Vec::<&str>::new());
        assert_eq!(imports("@import \"foo\" bar;").unwrap().1, Vec::<&str>::new());
        assert_eq!(imports("@importance").unwrap().1, Vec::<&str>::new());
    }

    #[test]
    fn parse_configuration() {
        assert_eq!(configuration("").unwrap().1, Vec::<Setting>::new());
        assert_eq!(configuration("# foo\n").unwrap().1, Vec::<Setting>::new());
        assert_eq!(
            configuration("source_dir = scss\n").unwrap().1,
            vec![Setting::new("source_dir", "scss")]
        );
        assert_eq!(
            configuration("source_dir = scss\noutput_dir = css").unwrap().1,
            vec![
                Setting::new("source_dir", "scss"),
                Setting::new("output_dir", "css")
            ]
        );
    }

    #[test]
    fn parse_configuration_with_sections() {
        assert_eq!(
            configuration("[cascade]\nprecision = 8\n\n[other]\nname_suffix = .min\n")
                .unwrap()
                .1,
            vec![
                Setting::new("precision", "8"),
                Setting::new("name_suffix", ".min")
            ]
        );
    }

    #[test]
    fn parse_configuration_with_comments() {
        assert_eq!(
            configuration("; generated\n# settings\n  precision = 8\r\n# end")
                .unwrap()
                .1,
            vec![Setting::new("precision", "8")]
        );
    }

    #[test]
    fn parse_setting() {
        assert_eq!(
            setting("x = 42\n").unwrap().1,
            Setting::new("x", "42")
        );
        assert_eq!(
            setting("output_style=expanded\n").unwrap().1,
            Setting::new("output_style", "expanded")
        );
        assert_eq!(setting("x =\n").unwrap().1, Setting::new("x", ""));
        assert_eq!(setting("x = \n").unwrap().1, Setting::new("x", ""));
        assert!(setting("= 42\n").is_err());
    }

    #[test]
    fn parse_section() {
        assert!(section("[foo]\n").is_ok());
        assert!(section("[]\n").is_err());
        assert!(section("[foo\n").is_err());
    }

    #[test]
    fn parse_string_line() {
        assert!(string_line("").is_err());
        assert_eq!(string_line("foo").unwrap().1, "foo");
        assert_eq!(string_line("foo \n").unwrap().1, "foo");
        assert_eq!(string_line("foo bar").unwrap().1, "foo bar");
    }

    #[test]
    fn parse_blank() {
        assert!(all_consuming(blank).parse("").is_ok());
        assert!(all_consuming(blank).parse(" \t").is_ok());
        assert!(all_consuming(blank).parse("#foo").is_ok());
        assert!(all_consuming(blank).parse("; foo").is_ok());
        assert!(all_consuming(blank).parse("\n").is_err());
    }

    #[test]
    fn parse_line_break() {
        assert!(all_consuming(line_break).parse("").is_err());
        assert!(all_consuming(line_break).parse("\n").is_ok());
        assert!(all_consuming(line_break).parse("\r\n").is_ok());
        assert!(all_consuming(line_break).parse(" # foo\n\n").is_ok());
        assert!(all_consuming(line_break).parse("\n ").is_err());
    }
}
