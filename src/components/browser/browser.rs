mod props {
    use crate::rendering::Size;
    use crate::tree::TreeOptions;

    use std::path::PathBuf;

    use typed_builder::TypedBuilder;

    #[derive(TypedBuilder)]
    pub struct Props {
        /// The directory whose entries make up the top level of the tree.
        pub root: PathBuf,
        /// The size of the screen.
        pub size: Size,
        #[builder(default)]
        pub tree_options: TreeOptions,
    }
}
pub use props::Props;

mod browser {
    use super::{Action, Effect, Event, Props, State};
    use crate::component::Component;
    use crate::components::browser::Cursor;
    use crate::rendering::Size;
    use crate::stateful::Stateful;
    use crate::tree::Tree;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Browses a directory tree.
    pub struct Browser {
        state: State,
    }

    impl Component<Props, Event, Effect> for Browser {
        fn new(props: Props) -> Self {
            let state = State::from(props);
            Self { state }
        }

        fn handle(&mut self, event: Event) -> Option<Effect> {
            if let Some(action) = self.map(event) {
                return self.state.perform(action);
            }
            None
        }
    }

    impl Browser {
        pub fn tree(&self) -> &Tree {
            &self.state.tree
        }

        pub fn cursor(&self) -> &Cursor {
            &self.state.cursor
        }

        fn map(&self, event: Event) -> Option<Action> {
            match event {
                Event::Resize(columns, rows) => Some(Action::Resize {
                    size: Size::from((columns, rows)),
                }),
                Event::Key(key_event) => match key_event {
                    KeyEvent {
                        code: KeyCode::Char('c'),
                        modifiers,
                        ..
                    } if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
                    KeyEvent {
                        code: KeyCode::Char('q'),
                        ..
                    } => Some(Action::Quit),
                    KeyEvent {
                        code: KeyCode::Up, ..
                    }
                    | KeyEvent {
                        code: KeyCode::Char('u'),
                        ..
                    } => Some(Action::Up),
                    KeyEvent {
                        code: KeyCode::Down,
                        ..
                    }
                    | KeyEvent {
                        code: KeyCode::Char('m'),
                        ..
                    } => Some(Action::Down),
                    KeyEvent {
                        code: KeyCode::Left,
                        ..
                    }
                    | KeyEvent {
                        code: KeyCode::Char('h'),
                        ..
                    } => Some(Action::Left),
                    KeyEvent {
                        code: KeyCode::Right,
                        ..
                    }
                    | KeyEvent {
                        code: KeyCode::Char('k'),
                        ..
                    } => Some(Action::Right),
                    KeyEvent {
                        code: KeyCode::Enter,
                        ..
                    } => Some(Action::Confirm),
                    _ => None,
                },
                _ => None,
            }
        }
    }
}
pub use browser::Browser;

pub use crossterm::event::Event;

mod state {
    use super::{Action, Effect, Props};
    use crate::components::browser::Cursor;
    use crate::rendering::Size;
    use crate::stateful::Stateful;
    use crate::tree::{Patch, Tree};

    pub struct State {
        pub tree: Tree,
        pub cursor: Cursor,
    }

    impl From<Props> for State {
        fn from(props: Props) -> Self {
            let tree = Tree::new(&props.root, props.tree_options);
            let cursor = Cursor::new(props.size);
            Self { tree, cursor }
        }
    }

    impl State {
        /// Act on the line under the cursor.
        ///
        /// Over a directory's name this selects the directory; over its icon it expands or
        /// collapses it. Anywhere on a file's row it selects the file.
        fn confirm(&mut self) -> Option<Effect> {
            let (top, left) = (self.cursor.top(), self.cursor.left());

            if let Some(dir) = self.tree.dir_at(top, left) {
                let node = self.tree.node(dir);
                if node.is_over_text(left) {
                    return Some(Effect::Select {
                        path: node.path().to_path_buf(),
                    });
                }
                if !node.has_subs() {
                    return None;
                }
                let patch: Patch = self.tree.toggle(dir);
                return Some(Effect::Paint(patch));
            }

            if let Some(file) = self.tree.file_at(top) {
                return Some(Effect::Select {
                    path: self.tree.node(file).path().to_path_buf(),
                });
            }

            None
        }

        fn resize(&mut self, size: Size) -> Option<Effect> {
            self.cursor.resize(size);
            Some(Effect::Paint(Patch::full(self.tree.len(), size.rows)))
        }
    }

    impl Stateful<Action, Effect> for State {
        fn perform(&mut self, action: Action) -> Option<Effect> {
            let mut effect: Option<Effect> = None;
            match action {
                Action::Up => {
                    self.cursor.move_up();
                }
                Action::Down => {
                    self.cursor.move_down();
                }
                Action::Left => {
                    self.cursor.move_left();
                }
                Action::Right => {
                    self.cursor.move_right();
                }
                Action::Confirm => {
                    effect = self.confirm();
                }
                Action::Resize { size } => {
                    effect = self.resize(size);
                }
                Action::Quit => {
                    effect = Some(Effect::Exit);
                }
            }
            effect
        }
    }
}
use state::State;

mod action {
    use crate::rendering::Size;

    pub enum Action {
        Up,
        Down,
        Left,
        Right,
        Confirm,
        Resize { size: Size },
        Quit,
    }
}
use action::Action;

mod effect {
    use crate::tree::Patch;

    use std::path::PathBuf;

    /// A side effect for the application to carry out.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Effect {
        /// Lines of the screen need to be drawn again.
        Paint(Patch),
        /// A file or directory was chosen.
        Select { path: PathBuf },
        /// Leave without choosing anything.
        Exit,
    }
}
pub use effect::Effect;
