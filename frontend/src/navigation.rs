use crate::Route;
use shared::{Destination, Navigator};

/// Routes core navigation intents through yew-router.
pub struct RouterNavigator(yew_router::navigator::Navigator);

impl RouterNavigator {
    pub fn new(navigator: yew_router::navigator::Navigator) -> Self {
        Self(navigator)
    }
}

pub fn route_for(destination: Destination) -> Route {
    match destination {
        Destination::PublicEntry => Route::Login,
        Destination::Dashboard => Route::Dashboard,
    }
}

impl Navigator for RouterNavigator {
    fn go_to(&self, destination: Destination) {
        self.0.push(&route_for(destination));
    }
}
