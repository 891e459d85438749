use yew::prelude::*;
use crate::routes::Route;

/// Lets any page move the app to another route
#[derive(Clone, PartialEq)]
pub struct Navigator {
    navigate: Callback<Route>,
}

impl Navigator {
    pub fn new(navigate: Callback<Route>) -> Self {
        Self { navigate }
    }

    pub fn push(&self, route: Route) {
        self.navigate.emit(route);
    }

    /// Click handler that navigates to `route`
    pub fn to<E: 'static>(&self, route: Route) -> Callback<E> {
        self.navigate.reform(move |_: E| route)
    }
}

#[hook]
pub fn use_navigator() -> Navigator {
    match use_context::<Navigator>() {
        Some(navigator) => navigator,
        None => {
            log::error!("❌ [NAV] use_navigator called outside the app shell");
            Navigator::new(Callback::noop())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn push_and_click_handlers_emit_the_route() {
        let visited = Rc::new(RefCell::new(Vec::new()));
        let navigator = {
            let visited = visited.clone();
            Navigator::new(Callback::from(move |route| visited.borrow_mut().push(route)))
        };

        navigator.push(Route::ArView);
        navigator.to::<()>(Route::Dashboard).emit(());
        assert_eq!(*visited.borrow(), vec![Route::ArView, Route::Dashboard]);
    }
}
