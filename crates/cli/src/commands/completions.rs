use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::generate;
use clap_complete::shells::{Bash, Fish, Zsh};

use crate::args::{Cli, CompletionShell};

pub fn generate_completions(shell: CompletionShell) {
    write_completions(shell, &mut io::stdout());
}

fn write_completions(shell: CompletionShell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    match shell {
        CompletionShell::Bash => generate(Bash, &mut cmd, name, out),
        CompletionShell::Zsh => generate(Zsh, &mut cmd, name, out),
        CompletionShell::Fish => generate(Fish, &mut cmd, name, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: CompletionShell) -> String {
        let mut out = Vec::new();
        write_completions(shell, &mut out);
        String::from_utf8(out).expect("utf8 script")
    }

    #[test]
    fn scripts_cover_every_subcommand() {
        for shell in [CompletionShell::Bash, CompletionShell::Zsh, CompletionShell::Fish] {
            let script = script(shell);
            assert!(script.contains("cpkit"), "{shell:?}");
            for sub in ["inspect", "validate", "transition", "schema"] {
                assert!(script.contains(sub), "{shell:?} missing {sub}");
            }
        }
    }
}
