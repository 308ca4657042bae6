/// Application events, converted from terminal input by
/// [`convert_event`](crate::io::convert_event).
pub enum Event {
    ZoomIn,
    ZoomOut,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    /// Recenter the view on the root tile
    ResetView,

    /// Drop the tree and rebuild it from the seed pattern
    Regenerate,

    /// Left mouse held over a terminal cell
    Brush { col: u16, row: u16 },

    CamResize { cols: u16, rows: u16 },

    /// Exit the application
    Exit,
}
