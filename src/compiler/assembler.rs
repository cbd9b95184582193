use super::codegen::Fragment;
use super::quoting::{comment_text, double_quote};

/// A pipe chain under construction.
struct Stage {
    text: String,
    /// Whether the last command's output may be piped into the next one.
    open: bool,
    /// Placeholder comments met since the last command of this chain.
    comments: Vec<String>,
}

/// Accumulates finished lines.
#[derive(Default)]
struct Assembly {
    lines: Vec<String>,
    stage: Option<Stage>,
}

impl Assembly {
    fn close_stage(&mut self) {
        if let Some(stage) = self.stage.take() {
            self.lines.push(stage.text);
            self.lines.extend(stage.comments);
        }
    }

    fn push_command(&mut self, text: &str, pipes_onward: bool) {
        match self.stage.as_mut() {
            Some(stage) if stage.open => {
                if stage.comments.is_empty() {
                    stage.text.push_str(" | ");
                } else {
                    stage.text.push_str(" |\n");
                    for comment in stage.comments.drain(..) {
                        stage.text.push_str(&comment);
                        stage.text.push('\n');
                    }
                }
                stage.text.push_str(text);
                stage.open = pipes_onward;
            }
            _ => {
                self.close_stage();
                self.stage = Some(Stage {
                    text: text.to_string(),
                    open: pipes_onward,
                    comments: Vec::new(),
                });
            }
        }
    }

    fn push_placeholder(&mut self, comment: &str) {
        let comment = comment_text(comment);
        match self.stage.as_mut() {
            Some(stage) if stage.open => stage.comments.push(comment),
            _ => {
                self.close_stage();
                self.lines.push(comment);
            }
        }
    }

    fn push_redirect(&mut self, path: &str, append: bool) {
        let redirect = format!("{} {}", if append { ">>" } else { ">" }, double_quote(path));
        match self.stage.as_mut() {
            Some(stage) => {
                stage.text.push(' ');
                stage.text.push_str(&redirect);
                self.close_stage();
            }
            // Nothing to redirect: create or truncate the file.
            None => self.lines.push(format!(": {}", redirect)),
        }
    }
}

/// Stitches sequenced fragments into the script body.
///
/// Fragments are joined with ` | ` while the chain stays open. A `Redirect`
/// attaches `> "path"` or `>> "path"` to the chain and closes it; a command
/// that does not produce output closes it too, and the next command starts a
/// new line. Placeholders inside an open chain become standalone comment lines
/// so the surrounding pipe stays valid shell. Control blocks are compound
/// commands and pipe like any other: `cat "a" | while ...; done > "b"`.
pub fn assemble(fragments: &[Fragment]) -> String {
    let mut assembly = Assembly::default();
    for fragment in fragments {
        match fragment {
            Fragment::Command { text, pipes_onward } => assembly.push_command(text, *pipes_onward),
            Fragment::Block(block) => assembly.push_command(block, true),
            Fragment::Redirect { path, append } => assembly.push_redirect(path, *append),
            Fragment::Placeholder(comment) => assembly.push_placeholder(comment),
        }
    }
    assembly.close_stage();
    assembly.lines.join("\n")
}
