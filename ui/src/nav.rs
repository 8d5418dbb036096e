//! Navigation model shared by the desktop and mobile headers: the static
//! menu, location canonicalization, and active-state resolution. Everything
//! here is plain data and pure functions so it can be tested off-browser.

/// A single link inside a parent entry's submenu. The href carries a path
/// and, typically, a fragment anchor (`/treatments#facials`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavChild {
    pub name: &'static str,
    pub href: &'static str,
}

/// One top-level menu entry. `Parent` owns a submenu and links to its
/// section page; `Leaf` links somewhere directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEntry {
    Leaf {
        name: &'static str,
        href: &'static str,
    },
    Parent {
        name: &'static str,
        path: &'static str,
        children: &'static [NavChild],
    },
}

impl NavEntry {
    pub fn name(&self) -> &'static str {
        match self {
            NavEntry::Leaf { name, .. } | NavEntry::Parent { name, .. } => name,
        }
    }

    /// Location the entry itself navigates to.
    pub fn href(&self) -> &'static str {
        match self {
            NavEntry::Leaf { href, .. } => href,
            NavEntry::Parent { path, .. } => path,
        }
    }
}

/// The menu, in render order. Immutable for the process lifetime; `name` is
/// the rendering key and must stay unique within each sibling list (checked
/// by `menu_config_is_well_formed`).
pub const MENU: &[NavEntry] = &[
    NavEntry::Leaf {
        name: "About",
        href: "/about",
    },
    NavEntry::Parent {
        name: "Treatments",
        path: "/treatments",
        children: &[
            NavChild {
                name: "Eyebrow Treatments",
                href: "/treatments#eyebrow-treatments",
            },
            NavChild {
                name: "Lip Treatments",
                href: "/treatments#lip-treatments",
            },
            NavChild {
                name: "Eye Treatments",
                href: "/treatments#eye-treatments",
            },
            NavChild {
                name: "Cosmetic Treatments",
                href: "/treatments#cosmetic-treatments",
            },
            NavChild {
                name: "Facials",
                href: "/treatments#facials",
            },
            NavChild {
                name: "Injectables",
                href: "/treatments#injectables",
            },
            NavChild {
                name: "Beauty Services",
                href: "/treatments#beauty-services",
            },
        ],
    },
    NavEntry::Leaf {
        name: "Gift Cards",
        href: "/giftcards",
    },
    NavEntry::Leaf {
        name: "T&C",
        href: "/terms-and-conditions",
    },
    NavEntry::Leaf {
        name: "Contact",
        href: "/contact",
    },
    NavEntry::Leaf {
        name: "Videos",
        href: "/videos",
    },
];

/// Where the user currently is, derived once per navigation event and
/// discarded on the next. `path` is canonical (§`normalize_path`); `fragment`
/// keeps its leading `#`, or is empty when no anchor is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLocation {
    pub path: String,
    pub fragment: String,
}

impl NavLocation {
    /// Canonicalize what the router reports. An empty pathname counts as the
    /// root, and a non-empty fragment gains its `#` if the source dropped it.
    pub fn new(pathname: &str, hash: &str) -> Self {
        let path = if pathname.is_empty() {
            "/".to_string()
        } else {
            normalize_path(pathname)
        };
        let fragment = if hash.is_empty() || hash.starts_with('#') {
            hash.to_string()
        } else {
            format!("#{hash}")
        };
        Self { path, fragment }
    }
}

/// Reduce a raw location to its canonical path: fragment stripped, leading
/// slash ensured, trailing slashes removed (except for `/` itself). Total
/// and idempotent; empty input stays empty.
///
/// `"/treatments#eyebrow-treatments"` becomes `"/treatments"`, `"about/"`
/// becomes `"/about"`.
pub fn normalize_path(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let no_hash = raw.split('#').next().unwrap_or_default();
    let with_leading = if no_hash.starts_with('/') {
        no_hash.to_string()
    } else {
        format!("/{no_hash}")
    };
    if with_leading == "/" {
        with_leading
    } else {
        with_leading.trim_end_matches('/').to_string()
    }
}

/// Path portion of an href, with any fragment stripped.
fn path_part(href: &str) -> &str {
    href.split('#').next().unwrap_or_default()
}

/// Fragment portion of an href, including the leading `#`.
fn fragment_part(href: &str) -> Option<&str> {
    href.find('#').map(|i| &href[i..])
}

/// True for leaves that can only be distinguished by their anchor: a bare
/// `#faq`, or a fragment hanging off an empty or root path (`/#faq`).
fn is_fragment_only(href: &str) -> bool {
    if href.trim_start().starts_with('#') {
        return true;
    }
    match href.find('#') {
        Some(i) => {
            let path = &href[..i];
            path.is_empty() || path == "/"
        }
        None => false,
    }
}

/// Should `entry` render as active at `at`?
///
/// Parents highlight whenever the user is anywhere on their section's page:
/// their own path or any child's path matches, fragment ignored. Fragment-only
/// leaves must match the anchor exactly, since path alone cannot tell them
/// apart. Plain leaves match on canonical path, with an empty href standing
/// in for the root.
pub fn is_active(entry: &NavEntry, at: &NavLocation) -> bool {
    match entry {
        NavEntry::Parent { path, children, .. } => {
            normalize_path(path) == at.path
                || children
                    .iter()
                    .any(|child| normalize_path(path_part(child.href)) == at.path)
        }
        NavEntry::Leaf { href, .. } => {
            if is_fragment_only(href) {
                fragment_part(href).is_some_and(|frag| frag == at.fragment)
            } else {
                let path = normalize_path(href);
                if path.is_empty() {
                    at.path == "/"
                } else {
                    path == at.path
                }
            }
        }
    }
}

/// Where an entry's anchor should point. Empty hrefs fall back to the root,
/// the same rule every rendering arm applies.
pub fn link_target(href: &'static str) -> &'static str {
    if href.is_empty() { "/" } else { href }
}

/// Which parent submenu is open, keyed by the entry's display name. At most
/// one is open at a time; the value is owned by the header component and
/// handed down to its items, never shared globally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropdownState(Option<&'static str>);

impl DropdownState {
    pub const CLOSED: Self = Self(None);

    /// Activating a parent toggles it. Activating a different parent while
    /// one is open switches straight to the new one, never dropping to
    /// `CLOSED` in between.
    #[must_use]
    pub fn toggled(self, key: &'static str) -> Self {
        if self.0 == Some(key) {
            Self::CLOSED
        } else {
            Self(Some(key))
        }
    }

    pub fn is_open(self, key: &str) -> bool {
        self.0 == Some(key)
    }

    pub fn is_any_open(self) -> bool {
        self.0.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(path: &str, fragment: &str) -> NavLocation {
        NavLocation {
            path: path.to_string(),
            fragment: fragment.to_string(),
        }
    }

    #[test]
    fn normalize_strips_fragment() {
        assert_eq!(normalize_path("/treatments#eyebrow-treatments"), "/treatments");
    }

    #[test]
    fn normalize_adds_leading_and_strips_trailing_slash() {
        assert_eq!(normalize_path("about/"), "/about");
        assert_eq!(normalize_path("/about///"), "/about");
    }

    #[test]
    fn normalize_handles_degenerate_inputs() {
        assert_eq!(normalize_path(""), "");
        assert_eq!(normalize_path("/"), "/");
        // a bare fragment reduces to the root path, not to nothing
        assert_eq!(normalize_path("#faq"), "/");
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = [
            "",
            "/",
            "//",
            "about/",
            "/a//",
            "treatments#eyebrow-treatments",
            "/a/b/",
            "#f",
            "a#b#c",
            " /odd ",
        ];
        for s in samples {
            let once = normalize_path(s);
            assert_eq!(normalize_path(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn parent_is_active_on_own_path_whatever_the_fragment() {
        let entry = NavEntry::Parent {
            name: "Treatments",
            path: "/treatments",
            children: &[
                NavChild {
                    name: "A",
                    href: "/treatments#a",
                },
                NavChild {
                    name: "B",
                    href: "/treatments#b",
                },
            ],
        };
        assert!(is_active(&entry, &at("/treatments", "")));
        assert!(is_active(&entry, &at("/treatments", "#a")));
        assert!(is_active(&entry, &at("/treatments", "#not-a-child")));
    }

    #[test]
    fn parent_is_active_via_child_path() {
        let entry = NavEntry::Parent {
            name: "Portfolio",
            path: "/work",
            children: &[NavChild {
                name: "Gallery",
                href: "/gallery#recent",
            }],
        };
        assert!(is_active(&entry, &at("/gallery", "")));
        assert!(!is_active(&entry, &at("/elsewhere", "")));
    }

    #[test]
    fn fragment_only_leaf_matches_anchor_exactly() {
        let entry = NavEntry::Leaf {
            name: "FAQ",
            href: "#faq",
        };
        assert!(is_active(&entry, &at("/", "#faq")));
        assert!(!is_active(&entry, &at("/", "#other")));
        assert!(!is_active(&entry, &at("/", "")));
    }

    #[test]
    fn fragment_off_the_root_path_is_fragment_only() {
        let entry = NavEntry::Leaf {
            name: "FAQ",
            href: "/#faq",
        };
        assert!(is_active(&entry, &at("/", "#faq")));
        assert!(!is_active(&entry, &at("/", "#misc")));
    }

    #[test]
    fn plain_leaf_matches_path_and_ignores_fragment() {
        let entry = NavEntry::Leaf {
            name: "About",
            href: "/about",
        };
        assert!(is_active(&entry, &at("/about", "")));
        assert!(is_active(&entry, &at("/about", "#anything")));
        assert!(!is_active(&entry, &at("/contact", "")));
    }

    #[test]
    fn trailing_slash_locations_still_match_after_canonicalization() {
        let entry = NavEntry::Leaf {
            name: "About",
            href: "/about",
        };
        let here = NavLocation::new("/about/", "");
        assert_eq!(here.path, "/about");
        assert!(is_active(&entry, &here));
    }

    #[test]
    fn empty_href_leaf_is_the_home_entry() {
        let entry = NavEntry::Leaf { name: "Home", href: "" };
        assert!(is_active(&entry, &at("/", "")));
        assert!(!is_active(&entry, &at("/about", "")));
    }

    #[test]
    fn leaf_with_path_and_fragment_matches_on_path() {
        let entry = NavEntry::Leaf {
            name: "Facials",
            href: "/treatments#facials",
        };
        assert!(is_active(&entry, &at("/treatments", "#facials")));
        // path precedence: active anywhere on the page, anchor irrelevant
        assert!(is_active(&entry, &at("/treatments", "#injectables")));
        assert!(!is_active(&entry, &at("/about", "#facials")));
    }

    #[test]
    fn location_canonicalizes_router_output() {
        let loc = NavLocation::new("", "");
        assert_eq!(loc.path, "/");
        assert_eq!(loc.fragment, "");

        let loc = NavLocation::new("/treatments/", "facials");
        assert_eq!(loc.path, "/treatments");
        assert_eq!(loc.fragment, "#facials");

        let loc = NavLocation::new("/videos", "#clip-2");
        assert_eq!(loc.fragment, "#clip-2");
    }

    #[test]
    fn empty_hrefs_navigate_to_the_root() {
        assert_eq!(link_target(""), "/");
        assert_eq!(link_target("/treatments"), "/treatments");
        assert_eq!(link_target("#faq"), "#faq");
    }

    #[test]
    fn dropdown_toggles_open_and_closed() {
        let state = DropdownState::CLOSED;
        let open = state.toggled("Treatments");
        assert!(open.is_open("Treatments"));
        assert!(open.is_any_open());
        assert_eq!(open.toggled("Treatments"), DropdownState::CLOSED);
    }

    #[test]
    fn dropdown_switches_between_parents_directly() {
        let open_a = DropdownState::CLOSED.toggled("A");
        let open_b = open_a.toggled("B");
        // one transition; no observable CLOSED in between
        assert!(open_b.is_open("B"));
        assert!(!open_b.is_open("A"));
    }

    #[test]
    fn link_selection_closes_rather_than_switches() {
        let open = DropdownState::CLOSED.toggled("Treatments");
        // a toggle keyed on another entry would hand the open slot over;
        // link handlers apply CLOSED unconditionally instead
        assert!(open.toggled("About").is_open("About"));
        assert!(!DropdownState::CLOSED.is_any_open());
        assert!(!DropdownState::CLOSED.is_open("Treatments"));
    }

    #[test]
    fn dropdown_default_is_closed() {
        assert_eq!(DropdownState::default(), DropdownState::CLOSED);
        assert!(!DropdownState::CLOSED.is_any_open());
    }

    #[test]
    fn menu_config_is_well_formed() {
        let mut top_names = std::collections::HashSet::new();
        for entry in MENU {
            assert!(
                top_names.insert(entry.name()),
                "duplicate top-level entry {:?}",
                entry.name()
            );
            // entry targets are already canonical in the config
            let own_path = path_part(entry.href());
            if !own_path.is_empty() {
                assert_eq!(normalize_path(own_path), own_path);
            }
            if let NavEntry::Parent { path, children, .. } = entry {
                assert!(!path.is_empty(), "{:?} has an empty path", entry.name());
                assert!(!children.is_empty(), "{:?} has no children", entry.name());
                let mut child_names = std::collections::HashSet::new();
                for child in *children {
                    assert!(
                        child_names.insert(child.name),
                        "duplicate child {:?} under {:?}",
                        child.name,
                        entry.name()
                    );
                    assert_eq!(normalize_path(path_part(child.href)), path_part(child.href));
                }
            }
        }
    }
}
