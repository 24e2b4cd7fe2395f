//! Hero banner focus

/// Buttons on the hero banner, in left-to-right order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeroButton {
    /// Preferred focus when the banner mounts
    #[default]
    Play,
    AddToList,
}

impl HeroButton {
    pub fn label(&self, in_list: bool) -> &'static str {
        match self {
            HeroButton::Play => "▶ Play",
            HeroButton::AddToList if in_list => "✓ My List",
            HeroButton::AddToList => "+ My List",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeroBanner {
    focused: HeroButton,
}

impl HeroBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> HeroButton {
        self.focused
    }

    pub fn focus_next(&mut self) -> bool {
        let moved = self.focused == HeroButton::Play;
        self.focused = HeroButton::AddToList;
        moved
    }

    pub fn focus_prev(&mut self) -> bool {
        let moved = self.focused == HeroButton::AddToList;
        self.focused = HeroButton::Play;
        moved
    }
}
