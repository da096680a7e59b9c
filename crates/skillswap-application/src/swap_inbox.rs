//! Incoming and outgoing swap requests of one user.

use skillswap_core::swap::{SkillSwap, SwapRole, SwapStatus};

/// A swap seen from one participant's side.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapEntry<'a> {
    pub swap: &'a SkillSwap,
    pub role: SwapRole,
    /// Display name of the other party, as copied at creation.
    pub counterpart_name: &'a str,
    pub counterpart_photo_url: Option<&'a str>,
}

impl<'a> SwapEntry<'a> {
    fn new(swap: &'a SkillSwap, role: SwapRole) -> Self {
        let (counterpart_name, counterpart_photo_url) = match role {
            SwapRole::Requester => (&swap.receiver_name, &swap.receiver_photo_url),
            SwapRole::Receiver => (&swap.requester_name, &swap.requester_photo_url),
        };
        Self {
            swap,
            role,
            counterpart_name,
            counterpart_photo_url: counterpart_photo_url.as_deref(),
        }
    }

    /// Status changes this side may request right now.
    pub fn available_actions(&self) -> Vec<SwapStatus> {
        match (self.swap.status, self.role) {
            (SwapStatus::Pending, SwapRole::Receiver) => {
                vec![SwapStatus::Accepted, SwapStatus::Rejected]
            }
            (SwapStatus::Pending, SwapRole::Requester) => vec![SwapStatus::Cancelled],
            (SwapStatus::Accepted, _) => vec![SwapStatus::Completed, SwapStatus::Cancelled],
            _ => Vec::new(),
        }
    }
}

/// Swaps split by the side the user is on, in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwapInbox<'a> {
    /// Requests addressed to the user.
    pub incoming: Vec<SwapEntry<'a>>,
    /// Requests the user sent.
    pub outgoing: Vec<SwapEntry<'a>>,
}

impl<'a> SwapInbox<'a> {
    pub fn for_user(swaps: &'a [SkillSwap], user_id: &str) -> Self {
        let mut inbox = Self::default();
        for swap in swaps {
            match swap.role_of(user_id) {
                Some(SwapRole::Receiver) => inbox
                    .incoming
                    .push(SwapEntry::new(swap, SwapRole::Receiver)),
                Some(SwapRole::Requester) => inbox
                    .outgoing
                    .push(SwapEntry::new(swap, SwapRole::Requester)),
                None => {}
            }
        }
        inbox
    }

    /// `(incoming, outgoing)` counts shown on the tabs.
    pub fn counts(&self) -> (usize, usize) {
        (self.incoming.len(), self.outgoing.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillswap_infrastructure::SeedCatalog;

    #[test]
    fn test_split_for_alice() {
        let swaps = SeedCatalog::builtin().swaps;
        let inbox = SwapInbox::for_user(&swaps, "1");

        assert_eq!(inbox.counts(), (1, 1));
        assert_eq!(inbox.incoming[0].swap.id, "swap-1");
        assert_eq!(inbox.incoming[0].counterpart_name, "Ben Carter");
        assert_eq!(inbox.outgoing[0].counterpart_name, "Chloe Davis");
    }

    #[test]
    fn test_available_actions_by_side() {
        let swaps = SeedCatalog::builtin().swaps;

        let alice = SwapInbox::for_user(&swaps, "1");
        assert_eq!(
            alice.incoming[0].available_actions(),
            vec![SwapStatus::Accepted, SwapStatus::Rejected]
        );
        // swap-2 is already accepted
        assert_eq!(
            alice.outgoing[0].available_actions(),
            vec![SwapStatus::Completed, SwapStatus::Cancelled]
        );

        let ben = SwapInbox::for_user(&swaps, "2");
        assert_eq!(ben.outgoing[0].available_actions(), vec![SwapStatus::Cancelled]);
    }

    #[test]
    fn test_uninvolved_user_has_empty_inbox() {
        let swaps = SeedCatalog::builtin().swaps;
        let inbox = SwapInbox::for_user(&swaps, "5");
        assert_eq!(inbox.counts(), (0, 0));
    }
}
