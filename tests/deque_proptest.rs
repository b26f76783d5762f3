use proptest::prelude::*;
use segdeque::{Deque, DequeConfig};
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Operation {
    PushBack(i16),
    PushFront(i16),
    PopBack,
    PopFront,
    InsertAt(usize, i16),
    EraseAt(usize),
    EraseRange(usize, usize),
    Set(usize, i16),
    Swap(usize, usize),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => any::<i16>().prop_map(Operation::PushBack),
        3 => any::<i16>().prop_map(Operation::PushFront),
        1 => Just(Operation::PopBack),
        1 => Just(Operation::PopFront),
        3 => (any::<usize>(), any::<i16>()).prop_map(|(i, v)| Operation::InsertAt(i, v)),
        2 => any::<usize>().prop_map(Operation::EraseAt),
        1 => (any::<usize>(), 0usize..40).prop_map(|(s, n)| Operation::EraseRange(s, n)),
        1 => (any::<usize>(), any::<i16>()).prop_map(|(i, v)| Operation::Set(i, v)),
        1 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Operation::Swap(a, b)),
    ]
}

/// Maps a random value onto `0..=bound` so most operations hit valid indices.
fn pick(raw: usize, bound: usize) -> usize {
    raw % (bound + 1)
}

proptest! {
    #[test]
    fn test_deque_matches_vec_deque(
        capacity in 1usize..6,
        ops in proptest::collection::vec(operation(), 1..400),
    ) {
        let mut model: VecDeque<i16> = VecDeque::new();
        let mut deque = Deque::with_config(DequeConfig::new().with_segment_capacity(capacity)).unwrap();

        for op in ops {
            match op {
                Operation::PushBack(v) => {
                    model.push_back(v);
                    deque.push_back(v);
                }
                Operation::PushFront(v) => {
                    model.push_front(v);
                    deque.push_front(v);
                }
                Operation::PopBack => {
                    prop_assert_eq!(deque.pop_back().ok(), model.pop_back());
                }
                Operation::PopFront => {
                    prop_assert_eq!(deque.pop_front().ok(), model.pop_front());
                }
                Operation::InsertAt(raw, v) => {
                    let index = pick(raw, model.len());
                    model.insert(index, v);
                    deque.insert_at(index, v);
                }
                Operation::EraseAt(raw) => {
                    // One past the end on purpose: the out-of-range case must not mutate.
                    let index = pick(raw, model.len());
                    prop_assert_eq!(deque.erase_at(index).ok(), model.remove(index));
                }
                Operation::EraseRange(raw, count) => {
                    let start = pick(raw, model.len());
                    let end = start + count;
                    let accepted = deque.erase_range(start, end);
                    prop_assert_eq!(accepted, start < end && end <= model.len());
                    if accepted {
                        model.drain(start..end).for_each(drop);
                    }
                }
                Operation::Set(raw, v) => {
                    let index = pick(raw, model.len());
                    let expected = model.get_mut(index).map(|slot| std::mem::replace(slot, v));
                    prop_assert_eq!(deque.set(index, v).ok(), expected);
                }
                Operation::Swap(a, b) => {
                    let (a, b) = (pick(a, model.len()), pick(b, model.len()));
                    let ok = deque.swap(a, b).is_ok();
                    prop_assert_eq!(ok, a < model.len() && b < model.len());
                    if ok {
                        model.swap(a, b);
                    }
                }
            }

            prop_assert_eq!(deque.len(), model.len());
            prop_assert_eq!(deque.front().ok(), model.front());
            prop_assert_eq!(deque.back().ok(), model.back());
        }

        for (index, value) in model.iter().enumerate() {
            prop_assert_eq!(deque.at(index).ok(), Some(value));
        }
        let rendered: Vec<String> = model.iter().map(ToString::to_string).collect();
        prop_assert_eq!(deque.to_string(), format!("[{}]", rendered.join(" ")));
    }

    #[test]
    fn test_clone_and_equality_follow_contents(values in proptest::collection::vec(any::<u8>(), 0..200)) {
        let deque: Deque<u8> = values.iter().copied().collect();
        let copy = deque.clone();
        prop_assert_eq!(&copy, &deque);

        let mut visited = Vec::new();
        copy.traverse(|_, v| {
            visited.push(*v);
            true
        });
        prop_assert_eq!(visited, values);
    }
}
