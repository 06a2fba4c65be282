const LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/popular", "Popular"),
    ("/upcoming", "Upcoming"),
    ("/top-rated", "Top Rated"),
    ("/tv", "TV Shows"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

pub fn nav_links(current_path: &str) -> Vec<NavLink> {
    let path = match current_path {
        "/populer" => "/popular",
        other => other,
    };
    LINKS
        .iter()
        .map(|&(href, label)| NavLink {
            href,
            label,
            active: is_active(href, path),
        })
        .collect()
}

fn is_active(href: &str, path: &str) -> bool {
    if href == "/" {
        return path == "/";
    }
    path == href
        || path
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}
