use shared::domain::PageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    pub id: PageId,
    pub title: &'static str,
    /// Whether the page reads the auxiliary payload of the navigation that opened it.
    pub accepts_aux: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: PageDescriptor,
}

const fn route(path: &'static str, id: PageId, title: &'static str) -> Route {
    Route {
        path,
        page: PageDescriptor {
            id,
            title,
            accepts_aux: false,
        },
    }
}

pub const HOME_PATH: &str = "/";
pub const CHECKOUT_PATH: &str = "/checkout";

static SITE_ROUTES: [Route; 10] = [
    route(HOME_PATH, PageId::Home, "Home"),
    route("/services", PageId::Services, "Services"),
    route("/agents", PageId::Agents, "AI Agents"),
    route("/pricing", PageId::Pricing, "Pricing"),
    route("/about", PageId::About, "About"),
    route("/faq", PageId::Faq, "FAQ"),
    route("/contact", PageId::Contact, "Contact"),
    Route {
        path: CHECKOUT_PATH,
        page: PageDescriptor {
            id: PageId::Checkout,
            title: "Checkout",
            accepts_aux: true,
        },
    },
    route("/crm", PageId::Crm, "CRM"),
    route("/website-management", PageId::WebsiteManagement, "Website Management"),
];

static SITE_REGISTRY: PageRegistry = PageRegistry {
    routes: &SITE_ROUTES,
};

#[derive(Debug)]
pub struct PageRegistry {
    routes: &'static [Route],
}

impl PageRegistry {
    pub fn site() -> &'static PageRegistry {
        &SITE_REGISTRY
    }

    pub fn routes(&self) -> &'static [Route] {
        self.routes
    }

    pub fn lookup(&self, path: &str) -> Option<&'static Route> {
        self.routes.iter().find(|route| route.path == path)
    }

    pub fn home(&self) -> &'static Route {
        &SITE_ROUTES[0]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn site_table_matches_published_paths() {
        let paths: Vec<_> = PageRegistry::site().routes().iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec![
                "/",
                "/services",
                "/agents",
                "/pricing",
                "/about",
                "/faq",
                "/contact",
                "/checkout",
                "/crm",
                "/website-management",
            ]
        );
    }

    #[test]
    fn each_path_maps_to_a_distinct_page() {
        let registry = PageRegistry::site();
        let pages: HashSet<_> = registry.routes().iter().map(|r| r.page.id).collect();
        assert_eq!(pages.len(), registry.routes().len());
        assert_eq!(registry.home().page.id, PageId::Home);
        assert_eq!(
            registry.lookup(CHECKOUT_PATH).map(|r| r.page.id),
            Some(PageId::Checkout)
        );
    }

    #[test]
    fn only_checkout_consumes_aux_payload() {
        let consumers: Vec<_> = PageRegistry::site()
            .routes()
            .iter()
            .filter(|r| r.page.accepts_aux)
            .map(|r| r.path)
            .collect();
        assert_eq!(consumers, vec![CHECKOUT_PATH]);
    }

    #[test]
    fn lookup_is_exact() {
        let registry = PageRegistry::site();
        assert!(registry.lookup("/pricing").is_some());
        assert!(registry.lookup("/pricing/").is_none());
        assert!(registry.lookup("/Pricing").is_none());
        assert!(registry.lookup("/blog").is_none());
    }
}
