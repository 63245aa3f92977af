//! Quick-reference markdown syntax shown from the help button.

/// One syntax example and what it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheatSheetEntry {
    pub syntax: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheatSheetSection {
    pub category: &'static str,
    pub items: &'static [CheatSheetEntry],
}

const fn entry(syntax: &'static str, description: &'static str) -> CheatSheetEntry {
    CheatSheetEntry { syntax, description }
}

pub const CHEAT_SHEET: &[CheatSheetSection] = &[
    CheatSheetSection {
        category: "Headers",
        items: &[
            entry("# H1", "Heading 1"),
            entry("## H2", "Heading 2"),
            entry("### H3", "Heading 3"),
        ],
    },
    CheatSheetSection {
        category: "Emphasis",
        items: &[
            entry("**bold**", "Bold text"),
            entry("*italic*", "Italic text"),
            entry("~~strikethrough~~", "Strikethrough"),
        ],
    },
    CheatSheetSection {
        category: "Lists",
        items: &[
            entry("- Item", "Unordered list"),
            entry("1. Item", "Ordered list"),
            entry("- [ ] Task", "Task list"),
        ],
    },
    CheatSheetSection {
        category: "Links & Images",
        items: &[entry("[text](url)", "Link"), entry("![alt](url)", "Image")],
    },
    CheatSheetSection {
        category: "Code",
        items: &[
            entry("`code`", "Inline code"),
            entry("```language\ncode\n```", "Code block"),
        ],
    },
    CheatSheetSection {
        category: "Other",
        items: &[
            entry("> quote", "Blockquote"),
            entry("---", "Horizontal rule"),
            entry("| col | col |", "Table"),
        ],
    },
];
