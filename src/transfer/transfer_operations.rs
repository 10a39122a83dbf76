//! Transfer Operations - Pure DOP Functions
//!
//! Move bounded quantities of filtered items between inventories.
//!
//! A transfer commits as it goes: the extracted stack leaves the source
//! immediately, whatever the destination accepts stays there, and whatever it
//! refuses is offered back to the source. Units the source cannot take back
//! are dropped and reported as lost.

use crate::filter::{matches, Filter};
use crate::inventory::{add_item, lock_pair, Inventory, ItemStack, SharedInventory};

/// What a transfer did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOutcome {
    /// No matching stack in the source; nothing changed
    NothingToMove,

    /// The destination accepted everything extracted
    Complete { moved: u32 },

    /// The destination accepted only part; the accepted part stays moved
    Partial {
        extracted: u32,
        accepted: u32,
        returned: u32,
        lost: u32,
    },
}

impl TransferOutcome {
    /// True only when the destination took the whole extracted amount
    pub fn succeeded(&self) -> bool {
        matches!(self, TransferOutcome::Complete { .. })
    }

    /// Units now in the destination
    pub fn accepted(&self) -> u32 {
        match *self {
            TransferOutcome::NothingToMove => 0,
            TransferOutcome::Complete { moved } => moved,
            TransferOutcome::Partial { accepted, .. } => accepted,
        }
    }
}

/// Take up to `max_amount` from the first matching non-empty slot
///
/// Slots are scanned in ascending index order and at most one slot is
/// touched. The slot shrinks by exactly the returned amount and is cleared
/// when it reaches zero.
pub fn extract(inventory: &mut Inventory, max_amount: u32, filters: Option<&[Filter]>) -> Option<ItemStack> {
    if max_amount == 0 {
        return None;
    }

    for slot in inventory.slots.iter_mut() {
        let Some(stack) = slot.as_mut() else {
            continue;
        };
        if stack.is_empty() || !matches(filters, stack) {
            continue;
        }

        let taken = stack.amount.min(max_amount);
        let extracted = stack.with_amount(taken);
        stack.amount -= taken;
        if stack.amount == 0 {
            *slot = None;
        }
        return Some(extracted);
    }

    None
}

/// Move up to `max_amount` matching items from `from` to `to`
///
/// Success requires the destination to accept the full extracted amount. A
/// partial move is not rolled back.
pub fn transfer(
    from: &mut Inventory,
    max_amount: u32,
    to: &mut Inventory,
    filters: Option<&[Filter]>,
) -> TransferOutcome {
    let Some(extracted) = extract(from, max_amount, filters) else {
        return TransferOutcome::NothingToMove;
    };
    let extracted_amount = extracted.amount;

    let Some(leftover) = add_item(to, extracted) else {
        return TransferOutcome::Complete {
            moved: extracted_amount,
        };
    };

    let accepted = extracted_amount - leftover.amount;
    let refused = leftover.amount;
    // Known defect: a source that cannot take the leftover back loses it
    let lost = add_item(from, leftover).map_or(0, |stack| stack.amount);
    if lost > 0 {
        log::warn!(
            "[Transfer::transfer] {} of {} lost: {} refused and {} could not return it",
            lost,
            refused,
            to.id,
            from.id
        );
    }

    log::debug!(
        "[Transfer::transfer] Partial {} -> {}: extracted={}, accepted={}, returned={}",
        from.id,
        to.id,
        extracted_amount,
        accepted,
        refused - lost
    );

    TransferOutcome::Partial {
        extracted: extracted_amount,
        accepted,
        returned: refused - lost,
        lost,
    }
}

/// `transfer` without filters: any stack qualifies
pub fn transfer_unfiltered(from: &mut Inventory, max_amount: u32, to: &mut Inventory) -> TransferOutcome {
    transfer(from, max_amount, to, None)
}

/// `transfer` between mutex-guarded inventories
///
/// Both locks are held for the whole move. Transferring an inventory into
/// itself moves nothing.
pub fn transfer_shared(
    from: &SharedInventory,
    max_amount: u32,
    to: &SharedInventory,
    filters: Option<&[Filter]>,
) -> TransferOutcome {
    match lock_pair(from, to) {
        Some((mut source, mut destination)) => transfer(&mut source, max_amount, &mut destination, filters),
        None => TransferOutcome::NothingToMove,
    }
}
