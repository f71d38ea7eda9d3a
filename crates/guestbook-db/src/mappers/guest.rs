//! Guest model to entity mapping

use guestbook_core::GuestEntry;

use crate::models::GuestModel;

impl From<GuestModel> for GuestEntry {
    fn from(model: GuestModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            message: model.message,
        }
    }
}
