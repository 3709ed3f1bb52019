/// Which part of the page currently owns pointer input.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PageState {
    Browsing,   // Regular scrolling and clicking
    Dragging,   // A press started on the carousel track and may become a swipe
    ModalOpen,  // The profile image viewer captures all input
}
