//! Player actions understood by [`super::EmojiGame::handle_action`].

/// Which purchasable a shop action is aimed at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// The click-power item.
    Clicker,
    /// A passive item, by catalogue name.
    Item(String),
}

impl Target {
    pub fn item(name: impl Into<String>) -> Self {
        Target::Item(name.into())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    // ── Core ────────────────────────────────────────────────────
    Click,

    // ── Shop ────────────────────────────────────────────────────
    Buy { target: Target, count: u32 },
    Sell { target: Target, count: u32 },
    Upgrade(Target),

    // ── Farm (by farm item name) ────────────────────────────────
    BuyPlot(String),
    Plant(String),
    Harvest(String),

    // ── Session ─────────────────────────────────────────────────
    Reset,
}
