use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Seating,
    #[at("/cart")]
    Cart,
    #[at("/404")]
    #[not_found]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn routes_map_to_paths() {
        assert_eq!(Route::Seating.to_path(), "/");
        assert_eq!(Route::Cart.to_path(), "/cart");
        assert_eq!(Route::recognize("/cart"), Some(Route::Cart));
    }
}
