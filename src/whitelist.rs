//! The subset of SVG the device understands.
//!
//! Names arrive in Clark notation (`{namespace-uri}local`) when they are
//! namespaced. Tags must come from the SVG namespace. Attributes may also
//! come from the XLink namespace or the reserved `xml:` namespace. Anything
//! from an editor namespace (`inkscape:`, `sodipodi:`, ...) is dropped even
//! when its local name looks familiar.

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// XLink namespace URI
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Namespace bound to the reserved `xml:` prefix (`xml:space`)
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// Elements the device renders
pub const TAGS: &[&str] = &[
    "svg", "rect", "g", "line", "path", "polyline", "circle", "polygon", "ellipse", "defs",
    "clipPath", "use",
];

/// Attributes the device reads
pub const ATTRIBUTES: &[&str] = &[
    "xmlns",
    "xmlns:xlink",
    "version",
    "id",
    "x",
    "y",
    "width",
    "height",
    "viewBox",
    "enable-background",
    "space",
    "fill",
    "stroke",
    "d",
    "stroke-width",
    "cx",
    "cy",
    "r",
    "x1",
    "y1",
    "x2",
    "y2",
    "stroke-dasharray",
    "display",
    "stroke-linecap",
    "points",
    "rx",
    "ry",
    "stroke-linejoin",
    "transform",
    "stroke-miterlimit",
    "href",
    "overflow",
    "clip-path",
    "opacity",
];

/// Attributes whose values get their decimals clamped
pub const NUMERIC_ATTRIBUTES: &[&str] = &[
    "x",
    "y",
    "width",
    "height",
    "stroke-width",
    "cx",
    "cy",
    "r",
    "x1",
    "y1",
    "x2",
    "y2",
    "rx",
    "ry",
    "opacity",
];

/// Strip the `{namespace}` qualifier from a name.
pub fn normalize_name(name: &str) -> &str {
    match name.find('}') {
        Some(end) => &name[end + 1..],
        None => name,
    }
}

/// The namespace URI of a Clark-notation name, if it has one.
pub fn namespace_of(name: &str) -> Option<&str> {
    let rest = name.strip_prefix('{')?;
    rest.find('}').map(|end| &rest[..end])
}

pub fn is_supported_tag(name: &str) -> bool {
    matches!(namespace_of(name), None | Some(SVG_NS)) && TAGS.contains(&normalize_name(name))
}

pub fn is_supported_attr(name: &str) -> bool {
    matches!(
        namespace_of(name),
        None | Some(SVG_NS) | Some(XLINK_NS) | Some(XML_NS)
    )
        && ATTRIBUTES.contains(&normalize_name(name))
}

pub fn is_numeric_attr(name: &str) -> bool {
    NUMERIC_ATTRIBUTES.contains(&normalize_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_clark_namespace() {
        assert_eq!(normalize_name("{http://www.w3.org/2000/svg}rect"), "rect");
        assert_eq!(normalize_name("rect"), "rect");
        assert_eq!(normalize_name("xmlns:xlink"), "xmlns:xlink");
    }

    #[test]
    fn namespace_is_extracted() {
        assert_eq!(namespace_of("{urn:a}b"), Some("urn:a"));
        assert_eq!(namespace_of("b"), None);
        assert_eq!(namespace_of("{unterminated"), None);
    }

    #[test]
    fn svg_tags_are_supported() {
        assert!(is_supported_tag("path"));
        assert!(is_supported_tag("{http://www.w3.org/2000/svg}clipPath"));
        assert!(!is_supported_tag("metadata"));
        assert!(!is_supported_tag("text"));
        assert!(!is_supported_tag("clippath"));
    }

    #[test]
    fn editor_namespaced_tags_are_not_supported() {
        assert!(!is_supported_tag(
            "{http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd}namedview"
        ));
        assert!(!is_supported_tag("{http://www.inkscape.org/namespaces/inkscape}path"));
    }

    #[test]
    fn attributes_are_filtered() {
        assert!(is_supported_attr("d"));
        assert!(is_supported_attr("xmlns:xlink"));
        assert!(is_supported_attr("{http://www.w3.org/1999/xlink}href"));
        assert!(!is_supported_attr("style"));
        assert!(!is_supported_attr("class"));
    }

    #[test]
    fn xml_space_is_supported() {
        assert!(is_supported_attr("{http://www.w3.org/XML/1998/namespace}space"));
        assert!(!is_supported_attr("{http://www.w3.org/XML/1998/namespace}lang"));
    }

    #[test]
    fn editor_attributes_are_not_supported() {
        assert!(!is_supported_attr(
            "{http://www.inkscape.org/namespaces/inkscape}version"
        ));
        assert!(!is_supported_attr(
            "{http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd}cx"
        ));
    }

    #[test]
    fn numeric_attributes() {
        assert!(is_numeric_attr("stroke-width"));
        assert!(is_numeric_attr("opacity"));
        assert!(!is_numeric_attr("points"));
        assert!(!is_numeric_attr("d"));
    }

    #[test]
    fn numeric_attributes_are_supported() {
        for name in NUMERIC_ATTRIBUTES {
            assert!(ATTRIBUTES.contains(name), "{name}");
        }
    }
}
