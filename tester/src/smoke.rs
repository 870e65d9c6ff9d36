use anyhow::{ensure, Context, Result};
use log::info;
use singly_linked_list::SinglyLinkedList;

/// Builds a list, runs `actions` on it and compares the space separated dump.
fn scenario(
    name: &str,
    values: &[i32],
    actions: impl FnOnce(&mut SinglyLinkedList<i32>),
    expected: &str,
) -> Result<()> {
    let mut lst: SinglyLinkedList<i32> = values.iter().copied().collect();
    info!("{name}: before: {lst}");
    actions(&mut lst);
    let result = lst.to_string();
    info!("{name}: after : {result}");
    ensure!(
        result == expected,
        "{name}: no match\nExpected: {expected}\nResult  : {result}"
    );
    lst.check_integrity()
        .with_context(|| format!("{name}: list is structurally broken"))?;
    Ok(())
}

pub fn delete_keys_from_middle_and_end() -> Result<()> {
    scenario(
        "delete keys 2 and 6",
        &[1, 2, 3, 4, 5, 6],
        |lst| {
            let _ = lst.delete_node_with_key(&2);
            let _ = lst.delete_node_with_key(&6);
        },
        "1 3 4 5",
    )
}

pub fn delete_keys_until_empty() -> Result<()> {
    scenario(
        "delete every key",
        &[1, 2],
        |lst| {
            let _ = lst.delete_node_with_key(&10);
            let _ = lst.delete_node_with_key(&1);
            let _ = lst.delete_node_with_key(&2);
        },
        "",
    )
}

pub fn delete_key_at_tail() -> Result<()> {
    scenario(
        "delete the tail key",
        &[1, 2, 3, 4],
        |lst| {
            let _ = lst.delete_node_with_key(&4);
        },
        "1 2 3",
    )
}

pub fn dedup_sorted() -> Result<()> {
    scenario(
        "remove duplicates from sorted",
        &[1, 1, 2, 3, 3, 3, 4, 4, 4, 4],
        SinglyLinkedList::remove_duplicates_from_sorted,
        "1 2 3 4",
    )
}

pub fn run_all() -> Result<()> {
    delete_keys_from_middle_and_end()?;
    delete_keys_until_empty()?;
    delete_key_at_tail()?;
    dedup_sorted()?;
    info!("all smoke scenarios passed");
    Ok(())
}
