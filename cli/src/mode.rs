use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GameMode {
    /// Two people sharing the terminal
    Pvp,
    /// Player 1 against the computer
    Pvc,
}

impl GameMode {
    pub fn vs_computer(&self) -> bool {
        *self == GameMode::Pvc
    }

    /// Answer to the mode menu; anything but "2" means two humans.
    pub fn from_menu_choice(choice: &str) -> Self {
        if choice.trim() == "2" {
            GameMode::Pvc
        } else {
            GameMode::Pvp
        }
    }
}
