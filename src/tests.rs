#![cfg(test)]

use super::*;

fn digits(integer: &BigInteger,) -> String {
    integer.digits().map(|digit| char::from(b'0' + digit)).collect()
}

fn int(number: &str,) -> BigInteger {
    number.parse().expect("failed to parse test integer")
}

#[test]
fn test_bounded_list() {
    let list = BoundedList::<u8>::new();
    assert_eq!(list.len(), 0, "`BoundedList::new` initialised non empty",);
    assert_eq!(list.max_len(), DEFAULT_MAX_LEN, "`BoundedList::new` initialised with wrong bound",);
    assert!(list.is_empty(), "`BoundedList::is_empty` false for a new list",);
    assert!(!list.is_full(), "`BoundedList::is_full` true for a new list",);
    assert_eq!(list.front(), None, "`BoundedList::front` initialised with front value",);
    assert_eq!(list.back(), None, "`BoundedList::back` initialised with back value",);

    let mut list = BoundedList::with_max_len(3,);
    list.link_front(1,);
    list.link_back(2,);
    list.link_front(0,);
    assert_eq!(list.len(), 3, "`BoundedList::len` length was not tracked across links",);
    assert!(list.is_full(), "`BoundedList::is_full` false at `max_len`",);
    assert_eq!(list.ensure_room(), Err(Error::CapacityExceeded { max_len: 3, }),
        "`BoundedList::ensure_room` allowed a value past `max_len`",
    );
    assert_eq!(list.iter().collect::<Vec<_>>(), vec![&0, &1, &2,],
        "`BoundedList::iter` did not iterate correctly.",
    );
    assert_eq!(list.iter().rev().collect::<Vec<_>>(), vec![&2, &1, &0,],
        "`BoundedList::iter` did not iterate backwards correctly.",
    );
    assert_eq!(list.iter().len(), 3, "`Iter::len` was wrong",);

    assert_eq!(list.unlink_front(), Some(0), "`BoundedList::unlink_front` did not unlink the head",);
    assert_eq!(list.unlink_back(), Some(2), "`BoundedList::unlink_back` did not unlink the tail",);
    assert_eq!(list.len(), 1, "`BoundedList::len` length was not tracked across unlinks",);
    assert_eq!(list.front(), list.back(), "a single value is not both head and tail",);
    assert_eq!(list.unlink_back(), Some(1),);
    assert_eq!(list.unlink_back(), None, "`BoundedList::unlink_back` unlinked from an empty list",);
    assert_eq!(list.unlink_front(), None, "`BoundedList::unlink_front` unlinked from an empty list",);
    assert!(list.is_empty(), "`BoundedList::is_empty` false after every unlink",);
}

#[test]
fn test_bounded_list_reuses_nodes() {
    let mut list = BoundedList::new();

    list.link_back('a',);
    list.link_back('b',);
    list.unlink_front();
    list.unlink_front();
    list.link_back('c',);
    list.link_back('d',);
    assert_eq!(list.nodes.len(), 2, "released `Node`s were not reused",);
    assert_eq!(list.iter().collect::<String>(), "cd", "reused `Node`s were linked wrong",);

    list.clear();
    assert!(list.is_empty(), "`BoundedList::clear` did not clear all values",);
    assert_eq!(list.iter().next(), None, "`BoundedList::clear` left a value to iterate",);
}

#[test]
fn test_bounded_list_unlink_middle() {
    let mut list = BoundedList::new();

    for i in 0..5 { list.link_back(i,); }
    let node = list.position_node(|&i| i == 2,).expect("`position_node` missed a value");
    assert_eq!(list.unlink(node,), Some(2), "`BoundedList::unlink` returned the wrong value",);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 3, 4,],
        "`BoundedList::unlink` did not relink the neighbours",
    );
    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![4, 3, 1, 0,],
        "`BoundedList::unlink` did not relink the neighbours backwards",
    );
    assert_eq!(list.position_node(|&i| i == 2,), None, "`position_node` found a removed value",);
}

#[test]
fn test_bounded_list_eq() {
    let mut lhs = BoundedList::new();
    let mut rhs = BoundedList::with_max_len(10,);

    lhs.link_back(1,);
    lhs.link_back(2,);
    rhs.link_front(2,);
    rhs.link_front(1,);
    assert_eq!(lhs, rhs, "equal lists compared unequal",);
    rhs.link_back(3,);
    assert_ne!(lhs, rhs, "a prefix compared equal",);
    assert_eq!(format!("{:?}", lhs), "[1, 2]", "`BoundedList` debugged wrong",);
}

#[test]
fn test_view() {
    let mut list = BoundedList::new();

    for i in 0..=10u8 { list.link_back(i,); }

    assert_eq!(list.front_view().expect("no front view"), &0, "`BoundedList::front_view` got wrong value",);
    assert_eq!(list.back_view().expect("no back view"), &10, "`BoundedList::back_view` got wrong value",);

    let view = list.front_view().and_then(|view| view.next()).expect("no second view");
    assert_eq!(view, &1, "`View::next` got wrong value",);
    assert_eq!(view.prev().expect("Failed to get prev value"), &0, "`View::prev` got wrong value",);
    assert!(view.prev().and_then(|view| view.prev()).is_none(), "`View::prev` stepped past the head",);
    assert!(list.back_view().and_then(|view| view.next()).is_none(), "`View::next` stepped past the tail",);
}

#[test]
fn test_stack() {
    let mut stack = Stack::new();

    stack.push(1).expect("push 1");
    stack.push(2).expect("push 2");
    stack.push(3).expect("push 3");
    assert_eq!(stack.pop(), Ok(3), "`Stack::pop` did not pop the last value",);
    assert_eq!(stack.peek(), Ok(&2), "`Stack::peek` did not see the top value",);
    assert_eq!(stack.len(), 2, "`Stack::peek` changed the length",);
    assert_eq!(stack.pop(), Ok(2),);
    assert_eq!(stack.pop(), Ok(1),);
    assert_eq!(stack.pop(), Err(Error::Empty), "`Stack::pop` popped from an empty stack",);
    assert_eq!(stack.peek(), Err(Error::Empty), "`Stack::peek` peeked into an empty stack",);
}

#[test]
fn test_stack_bound() {
    let mut stack = Stack::with_max_len(2,);

    stack.push('a').expect("push a");
    stack.push('b').expect("push b");
    assert!(stack.is_full(), "`Stack::is_full` false at `max_len`",);
    assert_eq!(stack.push('c'), Err(Error::CapacityExceeded { max_len: 2, }),
        "`Stack::push` pushed past `max_len`",
    );
    assert_eq!(stack.iter().collect::<String>(), "ba", "`Stack::push` changed a full stack",);
    assert_eq!(
        Error::CapacityExceeded { max_len: 2, }.to_string(),
        "container already contains 2 elements",
    );
}

#[test]
fn test_queue() {
    let mut queue = Queue::with_max_len(2,);

    queue.push(1).expect("push 1");
    queue.push(2).expect("push 2");
    assert_eq!(queue.push(3), Err(Error::CapacityExceeded { max_len: 2, }),
        "`Queue::push` pushed past `max_len`",
    );
    assert_eq!(queue.peek(), Ok(&1), "`Queue::peek` did not see the oldest value",);
    assert_eq!(queue.pop(), Ok(1), "`Queue::pop` did not pop in FIFO order",);
    queue.push(3).expect("push 3");
    assert_eq!(queue.pop(), Ok(2),);
    assert_eq!(queue.pop(), Ok(3),);
    assert_eq!(queue.pop(), Err(Error::Empty), "`Queue::pop` popped from an empty queue",);
    assert_eq!(queue.peek(), Err(Error::Empty), "`Queue::peek` peeked into an empty queue",);
}

#[test]
fn test_queue_clear() {
    let mut queue = Queue::new();

    for i in 0..4 { queue.push(i).expect("push"); }
    queue.clear();
    assert!(queue.is_empty(), "`Queue::clear` did not clear all values",);
    queue.push(9).expect("push after clear");
    assert_eq!(queue.pop(), Ok(9), "`Queue` unusable after `clear`",);
}

#[test]
fn test_teardown_drops_each_value_once() {
    use std::rc::Rc;

    let value = Rc::new(());
    {
        let mut queue = Queue::new();
        for _ in 0..5 { queue.push(Rc::clone(&value)).expect("push into queue"); }
        drop(queue.pop().expect("pop from queue"));

        let mut stack = Stack::with_max_len(3,);
        for _ in 0..3 { stack.push(Rc::clone(&value)).expect("push into stack"); }
        assert_eq!(stack.push(Rc::clone(&value)), Err(Error::CapacityExceeded { max_len: 3, }),);

        let mut list = DoublyEndedList::new();
        list.add_start(Rc::clone(&value)).expect("add_start");
        list.add_end(Rc::clone(&value)).expect("add_end");

        assert_eq!(Rc::strong_count(&value), 10, "containers did not hold each value once",);
    }
    assert_eq!(Rc::strong_count(&value), 1, "dropping the containers leaked or double dropped",);

    let mut queue = Queue::new();
    for _ in 0..4 { queue.push(Rc::clone(&value)).expect("push into queue"); }
    queue.clear();
    assert_eq!(Rc::strong_count(&value), 1, "`Queue::clear` did not release every value",);
}

#[test]
fn test_failed_bounded_build_releases_values() {
    use std::rc::Rc;

    /// Appends `count` clones of `value` the way a bounded parse does, stopping at the bound.
    fn build(value: &Rc<()>, count: usize, max_len: usize,) -> Result<BoundedList<Rc<()>>> {
        let mut list = BoundedList::with_max_len(max_len,);
        for _ in 0..count {
            list.ensure_room()?;
            list.link_back(Rc::clone(value),);
        }

        Ok(list)
    }

    let value = Rc::new(());
    assert_eq!(build(&value, 5, 3,).unwrap_err(), Error::CapacityExceeded { max_len: 3, },);
    assert_eq!(Rc::strong_count(&value), 1, "a failed build leaked its partial chain",);

    let list = build(&value, 3, 3,).expect("build within bound");
    assert_eq!(Rc::strong_count(&value), 4,);
    drop(list);
    assert_eq!(Rc::strong_count(&value), 1, "dropping the list leaked a value",);
}

#[test]
fn test_iter_debug_and_into_iter() {
    let mut list = BoundedList::new();
    for i in 1..=3 { list.link_back(i,); }

    let mut seen = Vec::new();
    for &i in &list { seen.push(i); }
    assert_eq!(seen, vec![1, 2, 3,], "`&BoundedList` iterated wrong",);

    let mut iter = list.iter();
    iter.next();
    assert_eq!(format!("{:?}", iter), "[2, 3]", "`Iter` debugged wrong",);
    assert_eq!(iter.len(), 2, "debugging `Iter` consumed it",);
}

#[test]
fn test_doubly_ended_list() {
    let mut list = DoublyEndedList::new();

    list.add_start(2).expect("add_start 2");
    list.add_end(3).expect("add_end 3");
    list.add_start(1).expect("add_start 1");
    assert_eq!(list.len(), 3, "`DoublyEndedList::add_start` did not count values",);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3,],
        "`DoublyEndedList` placed values at the wrong end",
    );
    assert_eq!((list.front(), list.back(),), (Some(&1), Some(&3),),);

    assert!(list.contains(&2), "`DoublyEndedList::contains` missed a value",);
    assert_eq!(list.remove(&2), Some(2), "`DoublyEndedList::remove` did not remove the value",);
    assert!(!list.contains(&2), "`DoublyEndedList::remove` left the value behind",);
    assert_eq!(list.remove(&7), None, "`DoublyEndedList::remove` removed a missing value",);
    assert_eq!(list.remove(&1), Some(1),);
    assert_eq!(list.remove(&3), Some(3),);
    assert!(list.is_empty(), "`DoublyEndedList::remove` did not count removals",);
}

#[test]
fn test_doubly_ended_list_bound() {
    let mut list = DoublyEndedList::with_max_len(1,);

    list.add_end(0).expect("add_end 0");
    assert_eq!(list.add_start(1), Err(Error::CapacityExceeded { max_len: 1, }),);
    assert_eq!(list.add_end(1), Err(Error::CapacityExceeded { max_len: 1, }),);
    assert_eq!(list.len(), 1, "a failed insert changed the length",);
}

#[test]
fn test_integer_parse() {
    assert_eq!(digits(&int("007")), "007", "leading zeros were not kept",);
    assert_eq!(int("12345").len(), 5,);
    assert!(BigInteger::new().is_empty(), "`BigInteger::new` initialised non empty",);
    assert!(int("").is_empty(), "an empty string parsed to digits",);
    assert_eq!(BigInteger::new().max_len(), DEFAULT_MAX_LEN,);

    assert_eq!("12a4".parse::<BigInteger>().unwrap_err(),
        Error::InvalidDigit { position: 2, found: 'a', },
        "non-numeric input was accepted",
    );
    assert_eq!("-1".parse::<BigInteger>().unwrap_err(), Error::InvalidDigit { position: 0, found: '-', },);
    assert!(" 1".parse::<BigInteger>().is_err(), "whitespace was accepted",);
    assert!("1,000".parse::<BigInteger>().is_err(), "a separator was accepted",);
    assert!("١".parse::<BigInteger>().is_err(), "a non-ASCII digit was accepted",);
}

#[test]
fn test_integer_add() {
    assert_eq!(digits(&(int("123") + int("456"))), "579",);
    assert_eq!(digits(&(int("99") + int("1"))), "100", "the carry did not propagate",);
    assert_eq!(digits(&(int("1") + int("99"))), "100", "the longer right operand was misread",);
    assert_eq!(digits(&(int("0") + int("0"))), "0",);
    assert_eq!(digits(&(int("5") + int("95"))), "100",);
    assert_eq!(digits(&(int("95") + int("5"))), "100",);
    assert_eq!(digits(&(int("1234") + int("0000"))), "1234",);
    assert_eq!(digits(&(int("999999999999999999999999") + int("1"))), "1000000000000000000000000",);
    assert_eq!(digits(&(int("12") + BigInteger::new())), "12", "an empty operand was not zero",);
    assert!((BigInteger::new() + BigInteger::new()).is_empty(),);
}

#[test]
fn test_integer_add_keeps_operands() {
    let lhs = int("58");
    let rhs = int("67");
    let sum = &lhs + &rhs;

    assert_eq!(sum.to_string(), "125", "`BigInteger` displayed wrong",);
    assert_eq!(lhs.to_string(), "58", "addition changed the left operand",);
    assert_eq!(rhs.to_string(), "67", "addition changed the right operand",);
}
