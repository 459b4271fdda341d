//! Curated LaTeX math symbol groups
//!
//! Ready-made ordered symbol lists so callers can render reference tables
//! without assembling the command lists by hand.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use phf::phf_map;

/// Lowercase Greek letters
pub const GREEK_LOWER: &[&str] = &[
    "\\alpha", "\\beta", "\\gamma", "\\delta", "\\epsilon", "\\zeta", "\\eta", "\\theta",
    "\\iota", "\\kappa", "\\lambda", "\\mu", "\\nu", "\\xi", "\\pi", "\\rho", "\\sigma",
    "\\tau", "\\upsilon", "\\phi", "\\chi", "\\psi", "\\omega",
];

/// Uppercase Greek letters (only the ones with dedicated commands)
pub const GREEK_UPPER: &[&str] = &[
    "\\Gamma", "\\Delta", "\\Theta", "\\Lambda", "\\Xi", "\\Pi", "\\Sigma", "\\Upsilon",
    "\\Phi", "\\Psi", "\\Omega",
];

/// Binary operators
pub const BINARY_OPERATORS: &[&str] = &[
    "\\pm", "\\mp", "\\times", "\\div", "\\cdot", "\\ast", "\\star", "\\circ", "\\cap",
    "\\cup", "\\vee", "\\wedge", "\\oplus", "\\ominus", "\\otimes",
];

/// Binary relations
pub const RELATIONS: &[&str] = &[
    "\\leq", "\\geq", "\\neq", "\\approx", "\\equiv", "\\sim", "\\simeq", "\\propto",
    "\\subset", "\\supset", "\\subseteq", "\\supseteq", "\\in", "\\ni", "\\perp",
    "\\parallel",
];

/// Arrows
pub const ARROWS: &[&str] = &[
    "\\leftarrow", "\\rightarrow", "\\leftrightarrow", "\\Leftarrow", "\\Rightarrow",
    "\\Leftrightarrow", "\\mapsto", "\\uparrow", "\\downarrow", "\\nearrow", "\\searrow",
];

/// Variable-size operators
pub const BIG_OPERATORS: &[&str] = &[
    "\\sum", "\\prod", "\\coprod", "\\int", "\\oint", "\\bigcap", "\\bigcup", "\\bigvee",
    "\\bigwedge", "\\bigoplus", "\\bigotimes",
];

/// Group lookup by name
pub static SYMBOL_GROUPS: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "greek-lower" => GREEK_LOWER,
    "greek-upper" => GREEK_UPPER,
    "binary-operators" => BINARY_OPERATORS,
    "relations" => RELATIONS,
    "arrows" => ARROWS,
    "big-operators" => BIG_OPERATORS,
};

lazy_static! {
    /// Groups in display order, for iterating a full reference listing
    pub static ref ORDERED_GROUPS: IndexMap<&'static str, &'static [&'static str]> = {
        let mut m = IndexMap::new();
        m.insert("greek-lower", GREEK_LOWER);
        m.insert("greek-upper", GREEK_UPPER);
        m.insert("binary-operators", BINARY_OPERATORS);
        m.insert("relations", RELATIONS);
        m.insert("arrows", ARROWS);
        m.insert("big-operators", BIG_OPERATORS);
        m
    };
}

/// Look up a curated symbol group by name
pub fn symbol_group(name: &str) -> Option<&'static [&'static str]> {
    SYMBOL_GROUPS.get(name).copied()
}

/// Names of all curated groups, in display order
pub fn group_names() -> Vec<&'static str> {
    ORDERED_GROUPS.keys().copied().collect()
}
