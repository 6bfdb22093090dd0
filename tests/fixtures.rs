use camino::Utf8Path;
use op1svg::path::{Token, tokenize};
use op1svg::whitelist::{ATTRIBUTES, NUMERIC_ATTRIBUTES, SVG_NS, TAGS, XLINK_NS};
use regex_lite::Regex;

/// Normalize a fixture and check every guarantee the output makes.
fn normalize_fixture(path: &Utf8Path) -> datatest_stable::Result<()> {
    let source = std::fs::read_to_string(path)?;
    let output = op1svg::normalize(&source)?;

    check_output(&output).map_err(|problem| format!("{path}: {problem}\n{output}"))?;

    let again = op1svg::normalize(&output)?;
    if again != output {
        return Err(format!(
            "{path}: normalizing twice changed the output\n{}",
            format_inline_diff(&output, &again)
        )
        .into());
    }

    Ok(())
}

fn check_output(output: &str) -> Result<(), String> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(output, options)
        .map_err(|e| format!("output is not well-formed: {e}"))?;

    check_namespaces(output)?;

    if doc.descendants().any(|n| n.is_comment()) {
        return Err("output contains a comment".to_string());
    }

    let too_precise = Regex::new(r"\.\d{5,}").unwrap();

    for node in doc.descendants().filter(|n| n.is_element()) {
        let tag = node.tag_name();
        if tag.namespace() != Some(SVG_NS) || !TAGS.contains(&tag.name()) {
            return Err(format!("unsupported element <{}>", tag.name()));
        }

        for attr in node.attributes() {
            let name = attr.name();
            if attr.namespace().is_some() || !ATTRIBUTES.contains(&name) {
                return Err(format!("unsupported attribute {name} on <{}>", tag.name()));
            }
            if (NUMERIC_ATTRIBUTES.contains(&name) || name == "d")
                && too_precise.is_match(attr.value())
            {
                return Err(format!("{name}=\"{}\" has too many decimals", attr.value()));
            }
            if name == "d" {
                check_lineto_segments(attr.value())?;
            }
        }
    }

    Ok(())
}

fn check_namespaces(output: &str) -> Result<(), String> {
    let svg = format!("xmlns=\"{SVG_NS}\"");
    let xlink = format!("xmlns:xlink=\"{XLINK_NS}\"");
    if output.matches("xmlns").count() != 2 || !output.contains(&svg) || !output.contains(&xlink)
    {
        return Err("root must declare exactly the SVG and XLink namespaces".to_string());
    }
    Ok(())
}

/// Every `L`/`l` command carries at most one coordinate pair.
fn check_lineto_segments(d: &str) -> Result<(), String> {
    let tokens = tokenize(d).map_err(|e| format!("output path does not tokenize: {e}"))?;
    let mut command = None;
    let mut args = 0;
    for token in tokens {
        match token {
            Token::Command(letter) => {
                command = Some(letter);
                args = 0;
            }
            Token::Number(_) => {
                args += 1;
                if matches!(command, Some('L' | 'l')) && args > 2 {
                    return Err(format!("lineto with more than one pair in d=\"{d}\""));
                }
            }
        }
    }
    Ok(())
}

fn format_inline_diff(first: &str, second: &str) -> String {
    use dissimilar::Chunk;

    let mut output = String::new();
    output.push_str("Legend: [-first only-] [+second only+]\n\n");
    for chunk in dissimilar::diff(first, second) {
        match chunk {
            Chunk::Equal(s) => output.push_str(s),
            Chunk::Delete(s) => {
                output.push_str("[-");
                output.push_str(s);
                output.push_str("-]");
            }
            Chunk::Insert(s) => {
                output.push_str("[+");
                output.push_str(s);
                output.push_str("+]");
            }
        }
    }
    output
}

datatest_stable::harness! {
    { test = normalize_fixture, root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"), pattern = r"\.svg$" },
}
