use safemed::form::{SubmitResult, SubmitTicket};

use super::view;

#[derive(Debug, Clone)]
pub enum Message {
    /// An event coming from the widgets.
    View(view::Message),
    /// A submission completed, identified by the ticket it was started
    /// with. The owning machine drops it if the attempt was superseded.
    Submitted(SubmitTicket, SubmitResult),
}
