/// Named user intents the shell can send from menus, toolbar buttons and
/// key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    OpenFolder,
    NewFile,
    NewFolder,
    OpenFile,
    Save,
    SaveAs,
    Quit,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::OpenFolder,
        Command::NewFile,
        Command::NewFolder,
        Command::OpenFile,
        Command::Save,
        Command::SaveAs,
        Command::Quit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::OpenFolder => "open_folder",
            Command::NewFile => "new_file",
            Command::NewFolder => "new_folder",
            Command::OpenFile => "open_file",
            Command::Save => "save",
            Command::SaveAs => "save_as",
            Command::Quit => "quit",
        }
    }

    pub fn from_name(name: &str) -> Option<Command> {
        Self::ALL.into_iter().find(|cmd| cmd.name() == name)
    }
}
