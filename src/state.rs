use std::sync::Arc;

use crate::contact::ContactService;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub contacts: ContactService,
}
