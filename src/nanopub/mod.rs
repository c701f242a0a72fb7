//! Nanopublications as parsed RDF datasets.
//!
//! A nanopublication is four named graphs: a head graph `[H]` that declares the
//! nanopublication `[N]` and points at its assertion `[A]`, provenance `[P]`
//! and publication info `[I]` graphs. Parsing goes through sophia and the
//! resulting dataset is checked against that shape before it is handed out.

mod format;
mod vocab;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Display};

use sophia_api::dataset::Dataset;
use sophia_api::quad::Quad;
use sophia_api::serializer::{QuadSerializer, Stringifier};
use sophia_api::source::QuadSource;
use sophia_api::term::Term;
use sophia_inmem::dataset::LightDataset;
use sophia_turtle::parser::{nq, trig};
use sophia_turtle::serializer::nq::NqSerializer;
use sophia_turtle::serializer::trig::TrigSerializer;

use crate::error::{Error, Result};

use self::vocab::{
    HAS_ASSERTION, HAS_PROVENANCE, HAS_PUBLICATION_INFO, NANOPUBLICATION, RDF_TYPE, compact,
};

pub use self::format::RdfFormat;

const MAX_NAMED_GRAPHS: usize = 4;

pub struct Nanopublication {
    uri: String,
    head_graph: String,
    assertion_graph: String,
    provenance_graph: String,
    publication_info_graph: String,
    dataset: LightDataset,
}

impl Nanopublication {
    /// Decode a document and check that it holds exactly one nanopublication.
    pub fn parse(bytes: &[u8], format: RdfFormat) -> Result<Nanopublication> {
        let dataset = match format {
            RdfFormat::Trig => trig::parse_bufread(bytes)
                .collect_quads::<LightDataset>()
                .map_err(|error| parse_error(format, error))?,
            RdfFormat::NQuads => nq::parse_bufread(bytes)
                .collect_quads::<LightDataset>()
                .map_err(|error| parse_error(format, error))?,
        };
        Nanopublication::from_dataset(dataset)
    }

    pub fn from_dataset(dataset: LightDataset) -> Result<Nanopublication> {
        let graphs = index_named_graphs(&dataset)?;
        let (uri, head_graph) = find_head(&graphs)?;
        let head = &graphs[&head_graph];

        let assertion_graph = find_part(&graphs, head, &uri, HAS_ASSERTION)?;
        let provenance_graph = find_part(&graphs, head, &uri, HAS_PROVENANCE)?;
        let publication_info_graph = find_part(&graphs, head, &uri, HAS_PUBLICATION_INFO)?;

        let names: BTreeSet<&str> = [
            uri.as_str(),
            head_graph.as_str(),
            assertion_graph.as_str(),
            provenance_graph.as_str(),
            publication_info_graph.as_str(),
        ]
        .into_iter()
        .collect();
        if names.len() != 5 {
            return Err(Error::invalid(format!(
                "nanopublication <{uri}> reuses the same URI for more than one part"
            )));
        }

        if !graphs[&provenance_graph]
            .iter()
            .any(|triple| triple.subject.is_iri(&assertion_graph))
        {
            return Err(Error::invalid(format!(
                "provenance <{provenance_graph}> does not reference assertion <{assertion_graph}>"
            )));
        }
        if !graphs[&publication_info_graph]
            .iter()
            .any(|triple| triple.subject.is_iri(&uri))
        {
            return Err(Error::invalid(format!(
                "publication info <{publication_info_graph}> does not reference nanopublication <{uri}>"
            )));
        }

        Ok(Nanopublication {
            uri,
            head_graph,
            assertion_graph,
            provenance_graph,
            publication_info_graph,
            dataset,
        })
    }

    pub fn serialize(&self, format: RdfFormat) -> Result<Vec<u8>> {
        let bytes = match format {
            RdfFormat::Trig => {
                let mut serializer = TrigSerializer::new_stringifier();
                serializer
                    .serialize_dataset(&self.dataset)
                    .map_err(|error| serialize_error(format, error))?;
                serializer.as_utf8().to_vec()
            }
            RdfFormat::NQuads => {
                let mut serializer = NqSerializer::new_stringifier();
                serializer
                    .serialize_dataset(&self.dataset)
                    .map_err(|error| serialize_error(format, error))?;
                serializer.as_utf8().to_vec()
            }
        };
        Ok(bytes)
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn head_graph(&self) -> &str {
        &self.head_graph
    }

    pub fn assertion_graph(&self) -> &str {
        &self.assertion_graph
    }

    pub fn provenance_graph(&self) -> &str {
        &self.provenance_graph
    }

    pub fn publication_info_graph(&self) -> &str {
        &self.publication_info_graph
    }

    pub fn dataset(&self) -> &LightDataset {
        &self.dataset
    }

    pub fn into_dataset(self) -> LightDataset {
        self.dataset
    }

    pub fn quad_count(&self) -> usize {
        self.dataset.quads().count()
    }
}

impl fmt::Debug for Nanopublication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nanopublication")
            .field("uri", &self.uri)
            .field("head_graph", &self.head_graph)
            .field("assertion_graph", &self.assertion_graph)
            .field("provenance_graph", &self.provenance_graph)
            .field("publication_info_graph", &self.publication_info_graph)
            .finish_non_exhaustive()
    }
}

fn parse_error(format: RdfFormat, error: impl Display) -> Error {
    Error::Parse {
        format,
        message: error.to_string(),
    }
}

fn serialize_error(format: RdfFormat, error: impl Display) -> Error {
    Error::Serialize {
        format,
        message: error.to_string(),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Node {
    Iri(String),
    Blank,
    Literal,
}

impl Node {
    fn from_term<T: Term>(term: T) -> Node {
        if let Some(iri) = term.iri() {
            return Node::Iri(iri.as_str().to_string());
        }
        if term.is_blank_node() {
            return Node::Blank;
        }
        Node::Literal
    }

    fn is_iri(&self, iri: &str) -> bool {
        matches!(self, Node::Iri(value) if value == iri)
    }
}

#[derive(Debug)]
struct Triple {
    subject: Node,
    predicate: Node,
    object: Node,
}

type NamedGraphs = BTreeMap<String, Vec<Triple>>;

/// Group every quad by graph name. All triples must live in a named graph.
fn index_named_graphs(dataset: &LightDataset) -> Result<NamedGraphs> {
    let mut graphs = NamedGraphs::new();
    for quad in dataset.quads() {
        let quad = quad.map_err(|error| Error::invalid(error.to_string()))?;
        let triple = Triple {
            subject: Node::from_term(quad.s()),
            predicate: Node::from_term(quad.p()),
            object: Node::from_term(quad.o()),
        };
        match quad.g().map(Node::from_term) {
            Some(Node::Iri(name)) => graphs.entry(name).or_default().push(triple),
            Some(_) => {
                return Err(Error::invalid("blank node graph names are not supported"));
            }
            None => return Err(Error::invalid("default graph is not empty")),
        }
    }
    if graphs.len() > MAX_NAMED_GRAPHS {
        return Err(Error::invalid(format!(
            "dataset contains {} named graphs, at most {MAX_NAMED_GRAPHS} allowed",
            graphs.len()
        )));
    }
    Ok(graphs)
}

/// Exactly one quad `[N] rdf:type np:Nanopublication [H]` identifies `[N]` and `[H]`.
fn find_head(graphs: &NamedGraphs) -> Result<(String, String)> {
    let mut head = None;
    for (name, triples) in graphs {
        let declared: Vec<&Node> = triples
            .iter()
            .filter(|triple| {
                triple.predicate.is_iri(RDF_TYPE) && triple.object.is_iri(NANOPUBLICATION)
            })
            .map(|triple| &triple.subject)
            .collect();
        let subject = match declared.as_slice() {
            [] => continue,
            [subject] => *subject,
            _ => {
                return Err(Error::invalid(format!(
                    "head graph <{name}> has more than one rdf:type np:Nanopublication"
                )));
            }
        };
        let Node::Iri(uri) = subject else {
            return Err(Error::invalid("nanopublication resource is not an IRI"));
        };
        if head.is_some() {
            return Err(Error::invalid("dataset declares more than one nanopublication"));
        }
        head = Some((uri.clone(), name.clone()));
    }
    head.ok_or_else(|| {
        Error::invalid("unable to locate head graph by rdf:type np:Nanopublication statement")
    })
}

/// Exactly one `[N] <property> [X] [H]` names the graph `[X]`, which must be present.
fn find_part(graphs: &NamedGraphs, head: &[Triple], uri: &str, property: &str) -> Result<String> {
    let objects: Vec<&Node> = head
        .iter()
        .filter(|triple| triple.subject.is_iri(uri) && triple.predicate.is_iri(property))
        .map(|triple| &triple.object)
        .collect();
    let object = match objects.as_slice() {
        [] => {
            return Err(Error::invalid(format!(
                "nanopublication <{uri}> has no {}",
                compact(property)
            )));
        }
        [object] => *object,
        _ => {
            return Err(Error::invalid(format!(
                "nanopublication <{uri}> has more than one {}",
                compact(property)
            )));
        }
    };
    let Node::Iri(name) = object else {
        return Err(Error::invalid(format!(
            "nanopublication <{uri}> {} is not an IRI",
            compact(property)
        )));
    };
    if !graphs.contains_key(name) {
        return Err(Error::invalid(format!(
            "nanopublication <{uri}> {} refers to a missing or empty named graph <{name}>",
            compact(property)
        )));
    }
    Ok(name.clone())
}
