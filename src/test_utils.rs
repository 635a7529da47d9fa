#[cfg(test)]
pub mod test_helpers {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::io::{self, Write};
    use std::path::PathBuf;
    use std::rc::Rc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio_util::sync::CancellationToken;

    use crate::ai::{AiError, CompletionClient, CompletionRequest};
    use crate::executor::{ExecutionError, ScriptRunner};
    use crate::interaction::{InputError, KeySource, PromptSource};
    use crate::validator::CommandResolver;

    pub const LIST_FILES_REPLY: &str = "Sure!\n\
        [SCRIPT]\nls -la\n[/SCRIPT]\n\
        [EXPLANATION]\nLists files\n[/EXPLANATION]\n\
        [EXECUTABLES]\nls\n[/EXECUTABLES]";

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Completion client that hands out queued replies and records every request
    #[derive(Clone, Default)]
    pub struct CannedClient {
        replies: Rc<RefCell<VecDeque<Result<String, AiError>>>>,
        pub requests: Rc<RefCell<Vec<CompletionRequest>>>,
    }

    impl CannedClient {
        pub fn new(replies: Vec<Result<String, AiError>>) -> Self {
            Self {
                replies: Rc::new(RefCell::new(replies.into())),
                requests: Rc::default(),
            }
        }

        pub fn replying(reply: &str) -> Self {
            Self::new(vec![Ok(reply.to_string())])
        }

        pub fn calls(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl CompletionClient for CannedClient {
        fn complete(
            &self,
            request: &CompletionRequest,
            _cancel_token: &CancellationToken,
        ) -> Result<String, AiError> {
            self.requests.borrow_mut().push(request.clone());
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(AiError::Network("no reply queued".to_string())))
        }
    }

    /// Key source replaying a fixed sequence; runs dry with a read error
    pub struct ScriptedKeys(VecDeque<KeyEvent>);

    impl ScriptedKeys {
        pub fn new(keys: Vec<KeyEvent>) -> Self {
            Self(keys.into())
        }

        pub fn chars(chars: &str) -> Self {
            Self(chars.chars().map(|c| key(KeyCode::Char(c))).collect())
        }
    }

    impl KeySource for ScriptedKeys {
        fn read_key(&mut self) -> Result<KeyEvent, InputError> {
            self.0
                .pop_front()
                .ok_or_else(|| InputError::Read("no key queued".to_string()))
        }
    }

    /// Prompt source replaying fixed lines; runs dry with end of input
    #[derive(Clone, Default)]
    pub struct ScriptedPrompts {
        lines: Rc<RefCell<VecDeque<String>>>,
        pub asked: Rc<Cell<usize>>,
    }

    impl ScriptedPrompts {
        pub fn new(lines: &[&str]) -> Self {
            Self {
                lines: Rc::new(RefCell::new(
                    lines.iter().map(|line| line.to_string()).collect(),
                )),
                asked: Rc::default(),
            }
        }
    }

    impl PromptSource for ScriptedPrompts {
        fn read_prompt(&mut self) -> Result<String, InputError> {
            self.asked.set(self.asked.get() + 1);
            self.lines
                .borrow_mut()
                .pop_front()
                .ok_or(InputError::EndOfInput)
        }
    }

    /// Script runner that records scripts instead of running them
    #[derive(Clone, Default)]
    pub struct RecordingRunner {
        pub scripts: Rc<RefCell<Vec<String>>>,
        pub result: Option<ExecutionError>,
    }

    impl RecordingRunner {
        pub fn failing(error: ExecutionError) -> Self {
            Self {
                scripts: Rc::default(),
                result: Some(error),
            }
        }
    }

    impl ScriptRunner for RecordingRunner {
        fn run(&self, script: &str) -> Result<(), ExecutionError> {
            self.scripts.borrow_mut().push(script.to_string());
            match &self.result {
                Some(error) => Err(error.clone()),
                None => Ok(()),
            }
        }
    }

    /// Resolves exactly the listed names
    #[derive(Clone, Default)]
    pub struct StaticResolver {
        known: Vec<String>,
    }

    impl StaticResolver {
        pub fn knowing(names: &[&str]) -> Self {
            Self {
                known: names.iter().map(|name| name.to_string()).collect(),
            }
        }
    }

    impl CommandResolver for StaticResolver {
        fn resolve(&self, name: &str) -> Option<PathBuf> {
            self.known
                .iter()
                .any(|known| known == name)
                .then(|| PathBuf::from("/usr/bin").join(name))
        }
    }

    /// Writer whose contents stay readable after it is boxed away
    #[derive(Clone, Default)]
    pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).to_string()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
