//! Terminal implementations of the host capabilities.

use colored::Colorize;

use bakerbot_application::LinkOpener;
use bakerbot_core::error::Result;

/// Prints the handoff link for the customer to open.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintLink;

impl LinkOpener for PrintLink {
    fn open(&self, url: &str) -> Result<()> {
        println!("{}", "Open this link to send your order:".bright_green());
        println!("{}", url.underline());
        println!();
        Ok(())
    }
}
