use super::{HelpBook, HelpFlag, HelpTopic, Section};

pub(crate) fn book() -> HelpBook<'static> {
    HelpBook {
        title: "Memo Calendar",
        usage: "mcal <command> [options]",
        topics: ALL_TOPICS,
        footer: &[
            "Use `mcal help <topic>` for focused docs, e.g. `mcal help set` or `mcal help file-format`.",
        ],
    }
}

const ALL_TOPICS: &[HelpTopic<'static>] = &[
    HelpTopic {
        name: "show",
        summary: "Print a month grid with memo previews; today is highlighted.",
        usage: "mcal show [YYYY-MM]",
        details: &[
            "Weeks start on Sunday. Each week prints a row of day numbers and, when any day in that week has a memo, a row of one-line previews.",
            "Multi-line memos are collapsed onto one line; long previews are cut to the cell width with an ellipsis.",
            "Without color (NO_COLOR set) today's number is marked with a trailing `*`.",
        ],
        flags: &[],
        aliases: &["month"],
        section: Section::Command,
        examples: &["mcal show", "mcal show 2024-02"],
    },
    HelpTopic {
        name: "view",
        summary: "Print the memo stored for a date.",
        usage: "mcal view <date>",
        details: &[
            "Dates are YYYY-MM-DD, or `today`. Prints nothing when the date has no memo.",
        ],
        flags: &[],
        aliases: &["open"],
        section: Section::Command,
        examples: &["mcal view 2024-03-19", "mcal view today"],
    },
    HelpTopic {
        name: "set",
        summary: "Save a memo for a date; blank text deletes it.",
        usage: "mcal set <date> <text...>",
        details: &[
            "Words after the date are joined with spaces. Use --stdin to read the memo verbatim, including newlines.",
            "Text is trimmed before saving and the whole store file is rewritten immediately.",
        ],
        flags: &[HelpFlag {
            name: "--stdin",
            desc: "Read the memo text from standard input.",
        }],
        aliases: &[],
        section: Section::Command,
        examples: &[
            "mcal set 2024-03-19 dentist at 3pm",
            "printf 'groceries\\nmilk' | mcal set today --stdin",
        ],
    },
    HelpTopic {
        name: "clear",
        summary: "Remove the memo for a date.",
        usage: "mcal clear <date>",
        details: &["Clearing a date without a memo is not an error."],
        flags: &[],
        aliases: &["delete"],
        section: Section::Command,
        examples: &["mcal clear 2024-03-19"],
    },
    HelpTopic {
        name: "list",
        summary: "Table of stored memos in date order.",
        usage: "mcal list [--month YYYY-MM]",
        details: &["Shows every stored memo with a one-line preview."],
        flags: &[HelpFlag {
            name: "--month <YYYY-MM>",
            desc: "Only list memos within the given month.",
        }],
        aliases: &[],
        section: Section::Command,
        examples: &["mcal list", "mcal list --month 2024-03"],
    },
    HelpTopic {
        name: "interactive",
        summary: "Line-driven session: navigate months and edit memos.",
        usage: "mcal interactive",
        details: &[
            "Commands start with `:`. Outside the memo popup: :prev, :next, :open <day|YYYY-MM-DD>, :quit.",
            "While the popup is open, plain lines are memo text: the first line replaces the loaded memo and later lines are appended. Start a line with `::` to type one literal `:`. :save commits, :cancel or :close discard, :clear empties the draft, :open switches to another date.",
            ":open with a full date moves the grid to that date's month.",
            "End of input quits without saving an open draft.",
        ],
        flags: &[],
        aliases: &["ui"],
        section: Section::Command,
        examples: &["mcal interactive"],
    },
    HelpTopic {
        name: "path",
        summary: "Print the memo store file path.",
        usage: "mcal path",
        details: &[],
        flags: &[],
        aliases: &[],
        section: Section::Command,
        examples: &[],
    },
    HelpTopic {
        name: "help",
        summary: "Show this overview or a focused topic.",
        usage: "mcal help [topic]",
        details: &[],
        flags: &[],
        aliases: &[],
        section: Section::Command,
        examples: &["mcal help interactive"],
    },
    HelpTopic {
        name: "MEMO_CALENDAR_DIR",
        summary: "Directory holding data.txt (default: next to the executable).",
        usage: "MEMO_CALENDAR_DIR",
        details: &[],
        flags: &[],
        aliases: &[],
        section: Section::Environment,
        examples: &[],
    },
    HelpTopic {
        name: "NO_COLOR",
        summary: "Disable ANSI colors.",
        usage: "NO_COLOR",
        details: &[],
        flags: &[],
        aliases: &[],
        section: Section::Environment,
        examples: &[],
    },
    HelpTopic {
        name: "MEMO_CALENDAR_LOG",
        summary: "Log level for stderr diagnostics (default: warn).",
        usage: "MEMO_CALENDAR_LOG",
        details: &[],
        flags: &[],
        aliases: &[],
        section: Section::Environment,
        examples: &[],
    },
    HelpTopic {
        name: "file-format",
        summary: "How memos are stored on disk.",
        usage: "mcal help file-format",
        details: &[
            "data.txt holds one memo per line as `YYYY-MM-DD|content`. Newlines inside a memo are written as the two characters backslash and n.",
            "Everything after the first `|` is content, so memos may contain `|`. Lines without any `|` are skipped with a warning.",
            "A memo that itself contains a literal backslash-n comes back as a newline after a reload.",
        ],
        flags: &[],
        aliases: &["format"],
        section: Section::Guide,
        examples: &[],
    },
];
