// Which screen the window is showing
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Screen {
    Initialising, // Widgets built, first refresh still pending
    Running,      // Control panel
    About,        // About screen
}
