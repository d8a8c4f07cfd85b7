//! Monotonic id allocation.
//!
//! Numeric ids are never reused, even after a delete, so a stale reference
//! from a view can only ever miss, never hit a different entity.
//! Order numbers are `ORD-1000` upwards, skipping numbers already taken.
//!
//! Reviews, comments and FAQ entries carry random ids. When an admin form
//! hands back a whole list of them, [`claim_child_ids`] makes sure each id
//! names exactly one entry in the store.

use std::collections::HashSet;
use std::hash::Hash;

use honeyzest_core::{
    BlogId, Comment, CommentId, Faq, FaqId, NotificationId, Order, OrderId, ProductId, Review,
    ReviewId, UserId,
};

use crate::error::{StoreError, StoreResult};

const FIRST_ORDER_NUMBER: u16 = 1000;
const LAST_ORDER_NUMBER: u16 = 9999;

#[derive(Debug, Clone)]
pub(super) struct IdAllocator {
    next_user: u64,
    next_product: u64,
    next_blog: u64,
    next_notification: u64,
    next_order: u16,
}

impl Default for IdAllocator {
    fn default() -> Self {
        IdAllocator {
            next_user: 1,
            next_product: 1,
            next_blog: 1,
            next_notification: 1,
            next_order: FIRST_ORDER_NUMBER,
        }
    }
}

impl IdAllocator {
    pub(super) fn user(&mut self) -> UserId {
        let id = UserId::new(self.next_user);
        self.next_user += 1;
        id
    }

    pub(super) fn product(&mut self) -> ProductId {
        let id = ProductId::new(self.next_product);
        self.next_product += 1;
        id
    }

    pub(super) fn blog(&mut self) -> BlogId {
        let id = BlogId::new(self.next_blog);
        self.next_blog += 1;
        id
    }

    pub(super) fn notification(&mut self) -> NotificationId {
        let id = NotificationId::new(self.next_notification);
        self.next_notification += 1;
        id
    }

    /// Returns the next unused order number without consuming it.
    ///
    /// Checkout commits it with [`IdAllocator::commit_order`] only once the
    /// order is recorded, so a failed checkout does not burn a number.
    pub(super) fn peek_order(&self, existing: &[Order]) -> StoreResult<(u16, OrderId)> {
        (self.next_order..=LAST_ORDER_NUMBER)
            .map(|n| (n, OrderId::from_number(n)))
            .find(|(_, id)| existing.iter().all(|o| &o.id != id))
            .ok_or(StoreError::OrderIdsExhausted)
    }

    pub(super) fn commit_order(&mut self, number: u16) {
        self.next_order = number.saturating_add(1);
    }
}

// =============================================================================
// Child Entity Ids
// =============================================================================

/// An entry owned by a single parent record, addressed by its own id.
pub(super) trait ChildEntity {
    type Id: Copy + Eq + Hash;

    fn id_mut(&mut self) -> &mut Self::Id;
    fn fresh_id() -> Self::Id;
}

impl ChildEntity for Review {
    type Id = ReviewId;

    fn id_mut(&mut self) -> &mut ReviewId {
        &mut self.id
    }

    fn fresh_id() -> ReviewId {
        ReviewId::new()
    }
}

impl ChildEntity for Comment {
    type Id = CommentId;

    fn id_mut(&mut self) -> &mut CommentId {
        &mut self.id
    }

    fn fresh_id() -> CommentId {
        CommentId::new()
    }
}

impl ChildEntity for Faq {
    type Id = FaqId;

    fn id_mut(&mut self) -> &mut FaqId {
        &mut self.id
    }

    fn fresh_id() -> FaqId {
        FaqId::new()
    }
}

/// Gives every entry of a submitted list an id no other entry holds.
///
/// The first occurrence of an id keeps it, unless `owned_elsewhere` says a
/// different parent already holds it. Repeats and foreign ids get a fresh id.
/// Returns how many ids were replaced.
pub(super) fn claim_child_ids<T: ChildEntity>(
    children: &mut [T],
    owned_elsewhere: impl Fn(&T::Id) -> bool,
) -> usize {
    let mut seen = HashSet::with_capacity(children.len());
    let mut replaced = 0;

    for child in children.iter_mut() {
        let id = *child.id_mut();
        if owned_elsewhere(&id) || !seen.insert(id) {
            let fresh = T::fresh_id();
            *child.id_mut() = fresh;
            seen.insert(fresh);
            replaced += 1;
        }
    }
    replaced
}
