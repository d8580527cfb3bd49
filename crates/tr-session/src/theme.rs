//! Game themes: titles, lifeline names, threshold presets, and personas.
//!
//! Both themes run the same rules. They differ only in presentation and in
//! how many streak points it takes to win a lifeline back.

use serde::{Deserialize, Serialize};

/// A character the Call lifeline can phone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Persona {
    /// Display name, also sent to the oracle.
    pub name: &'static str,
    /// A one-line delivery with an `{answer}` placeholder.
    pub catchphrase: &'static str,
}

/// Which preset to play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    /// Wizarding trivia; slow lifeline restoration (10 / 60).
    #[default]
    Wizard,
    /// Fight trivia; fast lifeline restoration (5 / 15).
    Fighter,
}

impl ThemeKind {
    /// Parse a theme name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "wizard" | "wizards" | "hp" => Some(Self::Wizard),
            "fighter" | "fighters" | "ufc" => Some(Self::Fighter),
            _ => None,
        }
    }

    /// The full theme description.
    pub fn theme(self) -> &'static Theme {
        match self {
            Self::Wizard => &WIZARD,
            Self::Fighter => &FIGHTER,
        }
    }
}

impl std::fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wizard => write!(f, "wizard"),
            Self::Fighter => write!(f, "fighter"),
        }
    }
}

/// Presentation and preset values for one theme.
#[derive(Debug)]
pub struct Theme {
    /// Game title.
    pub title: &'static str,
    /// Display name of the option-reduction lifeline.
    pub fifty_name: &'static str,
    /// Display name of the call lifeline.
    pub call_name: &'static str,
    /// Streak points needed to restore the fifty lifeline.
    pub fifty_threshold: u32,
    /// Streak points needed to restore the call lifeline.
    pub call_threshold: u32,
    /// Who the call lifeline can reach.
    pub personas: &'static [Persona],
}

impl Theme {
    /// Rules text for the lobby screen.
    pub fn rules(&self, fifty_threshold: u32, call_threshold: u32, time_limit: u32) -> String {
        format!(
            "Welcome to {title}!\n\
             \n\
             - Questions come in blocks of ten mixing every difficulty\n\
             - Easy 1 pt, Medium 2 pts, Hard 3 pts, Expert 4 pts\n\
             - {time_limit}s per question\n\
             - {fifty} lifeline: removes all but two options\n\
             - {call} lifeline: someone who knows tells you the answer\n\
             - Spend both lifelines to start a streak; streak points restore them\n\
             \x20 - {fifty_threshold} pts -> {fifty}\n\
             \x20 - {call_threshold} pts -> {call}\n\
             \x20 - using {fifty} during a streak breaks it\n\
             - One wrong answer or running out of time ends the game",
            title = self.title,
            fifty = self.fifty_name,
            call = self.call_name,
        )
    }

    /// Look up a persona by name.
    pub fn persona(&self, name: &str) -> Option<&'static Persona> {
        self.personas.iter().find(|p| p.name == name)
    }
}

static WIZARD: Theme = Theme {
    title: "the TriWizard Trivia Challenge",
    fifty_name: "Revelio",
    call_name: "Call a Wizard",
    fifty_threshold: 10,
    call_threshold: 60,
    personas: &[
        Persona {
            name: "Harry Potter",
            catchphrase: "I'd bet my Firebolt on it, it's {answer}!",
        },
        Persona {
            name: "Ron Weasley",
            catchphrase: "Blimey, even I know this one, it's {answer}!",
        },
        Persona {
            name: "Hermione Granger",
            catchphrase: "Honestly, it's {answer}, it's all in the library!",
        },
        Persona {
            name: "Albus Dumbledore",
            catchphrase: "Ah, the answer you seek has always been {answer}.",
        },
        Persona {
            name: "Lord Voldemort",
            catchphrase: "Fool. It is {answer}, and you will not forget it.",
        },
        Persona {
            name: "Fred and George Weasley",
            catchphrase: "Mischief managed, the answer's {answer}, obviously!",
        },
        Persona {
            name: "Severus Snape",
            catchphrase: "Clearly, it is {answer}. Ten points from your house.",
        },
    ],
};

static FIGHTER: Theme = Theme {
    title: "the FightIQ Challenge",
    fifty_name: "50:50",
    call_name: "Call a Fighter",
    fifty_threshold: 5,
    call_threshold: 15,
    personas: &[
        Persona {
            name: "Conor McGregor",
            catchphrase: "Mystic Mac called it, it's {answer}, no doubt about it!",
        },
        Persona {
            name: "Khabib Nurmagomedov",
            catchphrase: "Brother, it is {answer}. Send me location.",
        },
        Persona {
            name: "Alex Pereira",
            catchphrase: "Chama! {answer}, one shot, done.",
        },
        Persona {
            name: "Jon Jones",
            catchphrase: "Studied the tape. It's {answer}, every time.",
        },
        Persona {
            name: "Israel Adesanya",
            catchphrase: "Style bender says {answer}, smooth like poetry.",
        },
    ],
};
