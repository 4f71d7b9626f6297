/// Lazily enumerates the subsets of a slice of distinct items.
///
/// For at most one item the only value produced is the input itself. Otherwise every non-empty
/// subset is produced exactly once: first `[head]`, then for every subset `C` of the tail,
/// `C` followed by `[head] ++ C`. The subset containing every item always comes last.
///
/// The iterator holds one nested frame per item, never the subsets already produced.
pub struct Combinations<'a, T: Clone> {
    items: &'a [T],
    state: State<'a, T>,
}

enum State<'a, T: Clone> {
    Fresh,
    Descending {
        tail: Box<Combinations<'a, T>>,
        with_head: Option<Vec<T>>,
    },
    Exhausted,
}

impl<'a, T: Clone> Combinations<'a, T> {
    pub fn new(items: &'a [T]) -> Combinations<'a, T> {
        Combinations {
            items,
            state: State::Fresh,
        }
    }
}

impl<'a, T: Clone> Iterator for Combinations<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Fresh => {
                if self.items.len() <= 1 {
                    self.state = State::Exhausted;
                    return Some(self.items.to_vec());
                }
                self.state = State::Descending {
                    tail: Box::new(Combinations::new(&self.items[1..])),
                    with_head: None,
                };
                Some(vec![self.items[0].clone()])
            }
            State::Descending { ref mut tail, ref mut with_head } => {
                if let Some(combination) = with_head.take() {
                    return Some(combination);
                }
                match tail.next() {
                    Some(combination) => {
                        let mut extended = Vec::with_capacity(combination.len() + 1);
                        extended.push(self.items[0].clone());
                        extended.extend_from_slice(&combination);
                        *with_head = Some(extended);
                        Some(combination)
                    }
                    None => {
                        self.state = State::Exhausted;
                        None
                    }
                }
            }
            State::Exhausted => None,
        }
    }
}

/// Returns all `2^k` subsets of `items`, the empty subset first and `items` itself last.
pub fn power_set<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    // for no items the enumerator itself produces the lone empty subset
    let mut power_set = if items.is_empty() {
        Vec::new()
    } else {
        vec![Vec::new()]
    };
    power_set.extend(Combinations::new(items));
    power_set
}
