#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use radix_cache::{RadixTree, TreeError};

#[derive(Arbitrary, Debug)]
enum TreeMethod {
    Put { key: String, val: u32 },
    Get { key: String },
    Peek { key: String },
    BestMatch { query: String },
    Remove { key: String },
    EvictLru,
}

/// Reference model: a plain map for contents plus an explicit recency list
/// (front = least recently used).
struct Model {
    map: BTreeMap<String, u32>,
    order: Vec<String>,
}

impl Model {
    fn touch(&mut self, key: &str) {
        self.order.retain(|k| k != key);
        self.order.push(key.to_string());
    }

    fn best_match(&self, query: &str) -> Option<(&str, u32)> {
        for len in (0..=query.len()).rev() {
            if !query.is_char_boundary(len) {
                continue;
            }
            let prefix = &query[..len];
            if let Some(v) = self.map.get(prefix) {
                return Some((prefix, *v));
            }
        }
        None
    }
}

fuzz_target!(|methods: Vec<TreeMethod>| {
    let mut tree = RadixTree::new();
    let mut model = Model {
        map: BTreeMap::new(),
        order: Vec::new(),
    };

    for m in &methods {
        match m {
            TreeMethod::Put { key, val } => {
                let result = tree.put(key, *val);
                if key.is_empty() {
                    assert_eq!(result, Err(TreeError::EmptyKey));
                } else {
                    let expected = model.map.insert(key.clone(), *val);
                    model.touch(key);
                    assert_eq!(result, Ok(expected));
                }
            }
            TreeMethod::Get { key } => {
                let result = tree.get(key).copied();
                let expected = model.map.get(key).copied();
                assert_eq!(result, expected);
                if expected.is_some() {
                    model.touch(key);
                }
            }
            TreeMethod::Peek { key } => {
                assert_eq!(tree.peek(key).copied(), model.map.get(key).copied());
            }
            TreeMethod::BestMatch { query } => {
                let result = tree.get_best_match(query).map(|(v, p)| (p.to_string(), *v));
                let expected = model.best_match(query).map(|(p, v)| (p.to_string(), v));
                assert_eq!(result, expected);
                if let Some((prefix, _)) = expected {
                    model.touch(&prefix);
                }
            }
            TreeMethod::Remove { key } => {
                let result = tree.remove(key);
                let expected = model.map.remove(key);
                assert_eq!(result, expected);
                model.order.retain(|k| k != key);
            }
            TreeMethod::EvictLru => {
                let result = tree.evict_lru();
                if model.order.is_empty() {
                    assert_eq!(result, None);
                } else {
                    let key = model.order.remove(0);
                    let val = model.map.remove(&key).unwrap();
                    assert_eq!(result, Some((key, val)));
                }
            }
        }
    }

    assert_eq!(tree.len(), model.map.len());
    for (key, expected) in model.map.iter() {
        assert_eq!(
            tree.peek(key),
            Some(expected),
            "key {:?} diverged from the model",
            key
        );
    }
});
