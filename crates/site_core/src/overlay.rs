use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    MobileMenu,
    GetStarted,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayState {
    mobile_menu_open: bool,
    get_started_open: bool,
}

impl OverlayState {
    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn get_started_open(&self) -> bool {
        self.get_started_open
    }

    pub fn is_open(&self, kind: OverlayKind) -> bool {
        match kind {
            OverlayKind::MobileMenu => self.mobile_menu_open,
            OverlayKind::GetStarted => self.get_started_open,
        }
    }

    pub fn any_open(&self) -> bool {
        self.mobile_menu_open || self.get_started_open
    }
}

/// Two independent flags. Presenting both at once is avoided by the scripted
/// hand-off in [`OverlayManager::hand_off_to_get_started`], not by a hard lock.
#[derive(Debug, Default)]
pub struct OverlayManager {
    state: OverlayState,
}

impl OverlayManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Returns whether the flag actually changed.
    pub fn set(&mut self, kind: OverlayKind, open: bool) -> bool {
        let slot = match kind {
            OverlayKind::MobileMenu => &mut self.state.mobile_menu_open,
            OverlayKind::GetStarted => &mut self.state.get_started_open,
        };
        if *slot == open {
            return false;
        }
        *slot = open;
        debug!(?kind, open, "overlay toggled");
        true
    }

    pub fn open_mobile_menu(&mut self) -> bool {
        self.set(OverlayKind::MobileMenu, true)
    }

    pub fn close_mobile_menu(&mut self) -> bool {
        self.set(OverlayKind::MobileMenu, false)
    }

    pub fn open_get_started(&mut self) -> bool {
        self.set(OverlayKind::GetStarted, true)
    }

    pub fn close_get_started(&mut self) -> bool {
        self.set(OverlayKind::GetStarted, false)
    }

    pub fn close(&mut self, kind: OverlayKind) -> bool {
        self.set(kind, false)
    }

    /// Returns the new state of the menu.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        let open = !self.state.mobile_menu_open;
        self.set(OverlayKind::MobileMenu, open);
        open
    }

    /// "Get started" pressed inside the mobile menu.
    pub fn hand_off_to_get_started(&mut self) {
        self.close_mobile_menu();
        self.open_get_started();
    }
}
