//! Shell completion support for ninja-nutrition
//!
//! Static completion scripts covering subcommands, flags, category names,
//! output formats and config keys.

use clap::Command;
use clap_complete::Shell;
use std::io::Write;

/// Generate static shell completions
///
/// # Arguments
/// * `shell` - Target shell (bash, zsh, fish, powershell, elvish)
/// * `cmd` - The clap Command to generate completions for
/// * `buf` - Where the script is written
pub fn generate_static<W: Write>(shell: Shell, cmd: &mut Command, buf: &mut W) {
    clap_complete::generate(shell, cmd, cmd.get_name().to_string(), buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::CommandFactory;

    #[test]
    fn test_bash_script_mentions_subcommands() {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        generate_static(Shell::Bash, &mut cmd, &mut buf);

        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("ninja-nutrition"));
        for sub in ["browse", "recipes", "show", "categories", "config"] {
            assert!(script.contains(sub), "missing {sub}");
        }
    }

    #[test]
    fn test_zsh_script_lists_config_keys() {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        generate_static(Shell::Zsh, &mut cmd, &mut buf);

        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("default_category"));
    }
}
