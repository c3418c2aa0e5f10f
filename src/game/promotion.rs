//! Choosing the piece a pawn turns into.

use crate::board::{Color, PromotionChoice, SquareId};

/// A pawn is about to be traded; the resolver decides what it becomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PromotionRequest {
    pub color: Color,
    pub from: SquareId,
    pub to: SquareId,
}

/// Answers promotion requests synchronously during move application.
pub trait PromotionResolver {
    fn resolve(&mut self, request: &PromotionRequest) -> PromotionChoice;
}

impl<F> PromotionResolver for F
where
    F: FnMut(&PromotionRequest) -> PromotionChoice,
{
    fn resolve(&mut self, request: &PromotionRequest) -> PromotionChoice {
        self(request)
    }
}

/// Always answers with the given piece
impl PromotionResolver for PromotionChoice {
    fn resolve(&mut self, _request: &PromotionRequest) -> PromotionChoice {
        *self
    }
}

/// Resolver that always picks a queen
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysQueen;

impl PromotionResolver for AlwaysQueen {
    fn resolve(&mut self, _request: &PromotionRequest) -> PromotionChoice {
        PromotionChoice::Queen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PromotionRequest {
        PromotionRequest {
            color: Color::White,
            from: "a7".parse().unwrap(),
            to: "a8".parse().unwrap(),
        }
    }

    #[test]
    fn test_closure_resolver_sees_request() {
        let mut seen = Vec::new();
        let mut resolver = |req: &PromotionRequest| {
            seen.push(req.to);
            PromotionChoice::Knight
        };
        assert_eq!(resolver.resolve(&request()), PromotionChoice::Knight);
        assert_eq!(seen, vec!["a8".parse().unwrap()]);
    }

    #[test]
    fn test_fixed_resolvers() {
        assert_eq!(AlwaysQueen.resolve(&request()), PromotionChoice::Queen);
        assert_eq!(PromotionChoice::Rook.resolve(&request()), PromotionChoice::Rook);
    }
}
