#[macro_export]
macro_rules! debug {
    ($context:expr, $template:literal $(, $value:expr)* $(,)?) => {
        if $context.options().debug {
            let mut console = $context.console().lock().await;
            $crate::log!($context, console, $template $(, $value)*);
        }
    };
}

#[macro_export]
macro_rules! log {
    ($context:expr, $console:expr, $template:literal $(, $value:expr)* $(,)?) => {
        $console.write_stderr(
            format!(
                "{}cascade: {}\n",
                $context.options().log_prefix.as_deref().unwrap_or_default(),
                format!($template $(, $value)*),
            )
            .as_bytes(),
        ).await?;
    };
}
