pub mod detail;
pub mod summary;

/// How a summary card hands a student off to the detail view: the selected
/// id and the modal toggle are separate signals, fired in that order.
pub trait DetailOpener {
    fn open_detail(&mut self, id: i32);
    fn toggle_detail(&mut self);
}
