use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_core::Category;

pub(crate) fn run_types() {
    log::info!("Type labels:");
    log::info!("");

    for category in Category::all() {
        log::info!(
            "  {:<10} {}{}",
            category.key(),
            category.label().if_supports_color(Stdout, |t| t.bold()),
            if *category == Category::FALLBACK {
                format!(" {}", "(fallback)".if_supports_color(Stdout, |t| t.dimmed()))
            } else {
                String::new()
            },
        );
    }
}
