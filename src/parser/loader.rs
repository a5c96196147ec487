//! Event-driven loader that builds [`Node`] trees from `yaml-rust2` parser events.

use std::collections::HashMap;

use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser, Tag};
use yaml_rust2::scanner::{Marker, ScanError, TScalarStyle};

use super::node::{MappingEntry, Node, ScalarTag};

const CORE_SCHEMA_HANDLES: &[&str] = &["tag:yaml.org,2002:", "!!"];

/// Load every document in `content`, in stream order.
pub fn load_documents(content: &str) -> Result<Vec<Node>, ScanError> {
    let mut parser = Parser::new_from_str(content);
    let mut builder = NodeBuilder::new();

    // true = keep going past the first document
    parser.load(&mut builder, true)?;

    log::debug!("loaded {} YAML document(s)", builder.documents.len());
    Ok(builder.documents)
}

/// A collection node still receiving children.
enum Frame {
    Sequence {
        line: Option<u32>,
        anchor: usize,
        items: Vec<Node>,
    },
    Mapping {
        line: Option<u32>,
        anchor: usize,
        entries: Vec<MappingEntry>,
        pending_key: Option<Node>,
    },
}

struct NodeBuilder {
    stack: Vec<Frame>,
    anchors: HashMap<usize, Node>,
    documents: Vec<Node>,
}

impl NodeBuilder {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            anchors: HashMap::new(),
            documents: Vec::new(),
        }
    }

    fn remember(&mut self, anchor: usize, node: &Node) {
        if anchor > 0 {
            self.anchors.insert(anchor, node.clone());
        }
    }

    fn push_complete(&mut self, node: Node) {
        match self.stack.last_mut() {
            None => self.documents.push(node),
            Some(Frame::Sequence { items, .. }) => items.push(node),
            Some(Frame::Mapping {
                entries,
                pending_key,
                ..
            }) => match pending_key.take() {
                Some(key) => entries.push(MappingEntry { key, value: node }),
                None => *pending_key = Some(node),
            },
        }
    }
}

impl MarkedEventReceiver for NodeBuilder {
    fn on_event(&mut self, ev: Event, marker: Marker) {
        match ev {
            Event::Scalar(value, style, anchor, tag) => {
                let node = scalar_node(value.to_string(), &style, tag.as_ref(), &marker);
                self.remember(anchor, &node);
                self.push_complete(node);
            }
            Event::SequenceStart(anchor, _tag) => {
                self.stack.push(Frame::Sequence {
                    line: line_of(&marker),
                    anchor,
                    items: Vec::new(),
                });
            }
            Event::MappingStart(anchor, _tag) => {
                self.stack.push(Frame::Mapping {
                    line: line_of(&marker),
                    anchor,
                    entries: Vec::new(),
                    pending_key: None,
                });
            }
            Event::SequenceEnd | Event::MappingEnd => {
                let (node, anchor) = match self.stack.pop() {
                    Some(Frame::Sequence {
                        line,
                        anchor,
                        items,
                    }) => (Node::sequence(items, line), anchor),
                    Some(Frame::Mapping {
                        line,
                        anchor,
                        entries,
                        ..
                    }) => (Node::mapping(entries, line), anchor),
                    None => {
                        log::warn!("collection end at line {} without a start", marker.line());
                        return;
                    }
                };
                self.remember(anchor, &node);
                self.push_complete(node);
            }
            Event::Alias(anchor) => {
                let node = match self.anchors.get(&anchor) {
                    Some(target) => target.clone(),
                    None => Node::scalar(String::new(), ScalarTag::Null, line_of(&marker)),
                };
                self.push_complete(node);
            }
            _ => {}
        }
    }
}

fn scalar_node(
    text: String,
    style: &TScalarStyle,
    tag: Option<&Tag>,
    marker: &Marker,
) -> Node {
    let line = line_of(marker);

    let explicit = tag.and_then(|t| {
        if CORE_SCHEMA_HANDLES.contains(&t.handle.as_str()) {
            ScalarTag::from_core_suffix(&t.suffix)
        } else {
            Some(ScalarTag::Str)
        }
    });

    let scalar_tag = match explicit {
        Some(tag) => tag,
        None if matches!(style, TScalarStyle::Plain) => ScalarTag::infer_plain(&text),
        None => ScalarTag::Str,
    };

    Node::scalar(text, scalar_tag, line)
}

fn line_of(marker: &Marker) -> Option<u32> {
    u32::try_from(marker.line()).ok().filter(|line| *line > 0)
}
