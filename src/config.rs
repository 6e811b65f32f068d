/// Cosmetic knobs for the console command layer.
///
/// No on-disk config file is read; `ConsoleConfig::default()` is always used
/// today. The struct stays `pub` so an embedder can override it without
/// patching the REPL.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Bytes shown per render.
    pub render_width: usize,
    /// Prompt printed before each read.
    pub prompt: String,
    /// Line drawn above and below the rendered window.
    pub separator: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            render_width: 60,
            prompt: "> ".to_string(),
            separator: "=-".repeat(30),
        }
    }
}
