use pretty_assertions::assert_eq;

use crate::{ReadError, ReadErrorKind, SourceText, TokenReader};

/// A parsed node record.
#[derive(Debug, PartialEq)]
struct Node {
    id: i64,
    x: f64,
    y: f64,
    z: f64,
}

/// Parse `NODE <id>` followed by `X/Y/Z <value>` fields in any order.
///
/// This is the canonical consumer shape: probe each known field
/// keyword, guard the destination against duplicates, and enforce
/// required fields once the keyword loop falls through.
fn parse_node(reader: &mut TokenReader) -> Result<Node, ReadError> {
    reader.expect("NODE")?;
    let id = reader.read_int()?;
    let mut x = None;
    let mut y = None;
    let mut z = None;
    loop {
        if reader.eat("X") {
            if !reader.try_read_double_into(&mut x) {
                return Err(reader.duplicate_token());
            }
        } else if reader.eat("Y") {
            if !reader.try_read_double_into(&mut y) {
                return Err(reader.duplicate_token());
            }
        } else if reader.eat("Z") {
            if !reader.try_read_double_into(&mut z) {
                return Err(reader.duplicate_token());
            }
        } else {
            break;
        }
    }
    reader.require_set(&x, "X")?;
    reader.require_set(&y, "Y")?;
    reader.require_set(&z, "Z")?;
    Ok(Node {
        id,
        x: x.unwrap(),
        y: y.unwrap(),
        z: z.unwrap(),
    })
}

/// Top-level keyword loop: try each known record keyword; `END` is the
/// sentinel; anything else is an unexpected token.
fn parse_deck(reader: &mut TokenReader) -> Result<Vec<Node>, ReadError> {
    let mut nodes = Vec::new();
    while !reader.is_at_end() {
        if reader.current().is_some_and(|t| t.is("NODE")) {
            nodes.push(parse_node(reader)?);
        } else if reader.eat("END") {
            break;
        } else {
            return Err(reader.unexpected_token());
        }
    }
    Ok(nodes)
}

#[test]
fn single_node_record() {
    let src = SourceText::new("NODE 1 X 1.0 Y 2.0 Z 3.0");
    let mut reader = TokenReader::new(&src);
    let node = parse_node(&mut reader).unwrap();
    assert_eq!(
        node,
        Node {
            id: 1,
            x: 1.0,
            y: 2.0,
            z: 3.0,
        }
    );
    assert!(reader.is_at_end());
}

#[test]
fn fields_in_any_order() {
    let src = SourceText::new("NODE 2 Z 3.5 X 1.5 Y 2.5");
    let mut reader = TokenReader::new(&src);
    let node = parse_node(&mut reader).unwrap();
    assert_eq!(
        node,
        Node {
            id: 2,
            x: 1.5,
            y: 2.5,
            z: 3.5,
        }
    );
}

#[test]
fn deck_with_comments_and_sentinel() {
    let src = SourceText::new(
        "! geometry section\n\
         NODE 1 X 1.0 Y 2.0 Z 3.0\n\
         ! interior comment\n\
         NODE 2 X 4.0 Y 5.0 Z 6.0   ! trailing note\n\
         END\n",
    );
    let mut reader = TokenReader::new(&src);
    let nodes = parse_deck(&mut reader).unwrap();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[1].id, 2);
    assert_eq!(nodes[1].z, 6.0);
}

#[test]
fn records_spanning_multiple_lines() {
    let src = SourceText::new("NODE 3\nX 1.0 Y 2.0\nZ 3.0\nEND");
    let mut reader = TokenReader::new(&src);
    let nodes = parse_deck(&mut reader).unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].y, 2.0);
}

#[test]
fn duplicate_field_is_rejected() {
    let src = SourceText::new("NODE 1 X 1.0 X 2.0 Y 2.0 Z 3.0");
    let mut reader = TokenReader::new(&src);
    let err = parse_node(&mut reader).unwrap_err();
    assert_eq!(
        err.kind,
        ReadErrorKind::DuplicateToken {
            token: Some("2.0".to_owned()),
        }
    );
    assert_eq!(err.line, 1);
}

#[test]
fn missing_required_field_is_reported_by_name() {
    let src = SourceText::new("NODE 1 X 1.0 Z 3.0");
    let mut reader = TokenReader::new(&src);
    let err = parse_node(&mut reader).unwrap_err();
    assert_eq!(
        err.kind,
        ReadErrorKind::RequiredFieldMissing {
            name: "Y".to_owned(),
        }
    );
}

#[test]
fn unexpected_record_keyword_reports_true_line() {
    let src = SourceText::new(
        "NODE 1 X 1.0 Y 2.0 Z 3.0\n\
         ! comment pushing the bad record down\n\
         \n\
         ELEMENT 9\n",
    );
    let mut reader = TokenReader::new(&src);
    let err = parse_deck(&mut reader).unwrap_err();
    assert_eq!(err.line, 4);
    assert_eq!(
        err.kind,
        ReadErrorKind::UnexpectedToken {
            token: Some("ELEMENT".to_owned()),
        }
    );
}

#[test]
fn settings_block_with_glued_assignments() {
    // `NCTRL=4` and `TOL=1.0E-6` tokenize with isolated `=` signs.
    let src = SourceText::new("NCTRL=4 TOL=1.0E-6 VERBOSE=true");
    let mut reader = TokenReader::new(&src);

    let mut nctrl = None;
    let mut tol = None;
    let mut verbose = None;
    while !reader.is_at_end() {
        match reader.expect_any(&["NCTRL", "TOL", "VERBOSE"]) {
            Ok(0) => {
                reader.expect("=").unwrap();
                assert!(reader.try_read_int_into(&mut nctrl));
            }
            Ok(1) => {
                reader.expect("=").unwrap();
                assert!(reader.try_read_double_into(&mut tol));
            }
            Ok(2) => {
                reader.expect("=").unwrap();
                assert!(reader.try_read_bool_into(&mut verbose));
            }
            Ok(_) | Err(_) => unreachable!("settings input only holds known keys"),
        }
    }
    assert_eq!(nctrl, Some(4));
    assert_eq!(tol, Some(1.0e-6));
    assert_eq!(verbose, Some(true));
}

#[test]
fn ignore_discards_unneeded_tokens() {
    // A consumer skipping a field it does not care about.
    let src = SourceText::new("LABEL legacy_name NODE 1 X 0.0 Y 0.0 Z 0.0");
    let mut reader = TokenReader::new(&src);
    assert!(reader.eat("LABEL"));
    reader.ignore();
    let node = parse_node(&mut reader).unwrap();
    assert_eq!(node.id, 1);
}
