//! System prompt composition
//!
//! Builds the instruction sent ahead of the user's request, telling the
//! model which shell and operating system to target and which reply
//! convention to follow.

use super::suggestion::Convention;
use crate::config::ConfigError;

const MARKERS_TEMPLATE: &str = "You are a professional script developer.
I will ask you to create a {shell} script for the operating system {os} that one can execute in a terminal.
You must reply using exactly the following sections, in this order:
[SCRIPT]
the {shell} script content. It must be directly runnable in a terminal. Do not wrap it in code fences.
[/SCRIPT]
[EXPLANATION]
a succinct description of the script. Use as few words as possible. If there are multiple steps, list them as bullet points.
[/EXPLANATION]
[EXECUTABLES]
comma-separated list of the executables used by the script
[/EXECUTABLES]";

const JSON_TEMPLATE: &str = r#"You are a professional script developer.
I will ask you to create a {shell} script for the operating system {os} that one can execute in a terminal.
You must reply using the following json format and nothing else:
{
"command": "the {shell} script content as a single json escaped line. It should be able to be directly run in a terminal. Do not include any other text.",
"executables": ["list of executables that are used in the script as json array of strings"],
"explain": "description of the {shell} script as a json escaped line. You must describe succinctly, use as few words as possible, do not be verbose. If there are multiple steps, please display them as bullet points."
}"#;

const SHELL_PLACEHOLDER: &str = "{shell}";
const OS_PLACEHOLDER: &str = "{os}";

/// Compose the system prompt for a convention, OS and shell
///
/// Fails instead of sending a half-filled instruction when the OS or shell
/// name is blank or would inject another placeholder.
pub fn build_system_prompt(
    convention: Convention,
    operating_system: &str,
    shell_name: &str,
) -> Result<String, ConfigError> {
    let operating_system = operating_system.trim();
    let shell_name = shell_name.trim();

    for (label, value) in [("operating system", operating_system), ("shell", shell_name)] {
        if value.is_empty() {
            return Err(ConfigError::Prompt(format!("{} name is empty", label)));
        }
        if value.contains(['{', '}', '\n']) {
            return Err(ConfigError::Prompt(format!(
                "{} name {:?} contains reserved characters",
                label, value
            )));
        }
    }

    let template = match convention {
        Convention::Markers => MARKERS_TEMPLATE,
        Convention::Json => JSON_TEMPLATE,
    };

    Ok(template
        .replace(SHELL_PLACEHOLDER, shell_name)
        .replace(OS_PLACEHOLDER, operating_system))
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
