//! Route resolution
//!
//! A fee is resolved by evaluating an ordered chain of steps, each of which either yields
//! a fee or passes. The standard chain is exact route, wildcard route, default fee.

use std::fmt::{Display, Formatter, Result as FmtResult};

use rusty_money::{Money, iso::Currency};
use serde::Serialize;
use smallvec::{SmallVec, smallvec};

use crate::{routes::WILDCARD_REGION, sources::FeeRoutes};

/// A single strategy in the resolution chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStep {
    /// Active route from the origin city to the exact destination region
    Exact,

    /// Active route from the origin city to [`WILDCARD_REGION`]
    Wildcard,

    /// Configured default fee; always matches
    Default,
}

impl ResolutionStep {
    async fn try_resolve<R: FeeRoutes + ?Sized>(
        self,
        routes: &R,
        from_city: &str,
        to_region: &str,
        default_fee: Money<'static, Currency>,
    ) -> Result<Option<Money<'static, Currency>>, R::Error> {
        match self {
            ResolutionStep::Exact => routes.active_route_fee(from_city, to_region).await,
            ResolutionStep::Wildcard => routes.active_route_fee(from_city, WILDCARD_REGION).await,
            ResolutionStep::Default => Ok(Some(default_fee)),
        }
    }
}

impl Display for ResolutionStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ResolutionStep::Exact => f.write_str("exact route"),
            ResolutionStep::Wildcard => f.write_str("wildcard route"),
            ResolutionStep::Default => f.write_str("default fee"),
        }
    }
}

/// Fee produced by the resolution chain, with the step that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedFee {
    /// Resolved fee
    pub fee: Money<'static, Currency>,

    /// Step that matched
    pub source: ResolutionStep,
}

/// Evaluates resolution steps in order until one yields a fee.
#[derive(Debug, Clone)]
pub struct RouteResolver {
    steps: SmallVec<[ResolutionStep; 3]>,
    default_fee: Money<'static, Currency>,
}

impl RouteResolver {
    /// Standard chain: exact route, then wildcard route, then the default fee.
    pub fn new(default_fee: Money<'static, Currency>) -> Self {
        Self {
            steps: smallvec![
                ResolutionStep::Exact,
                ResolutionStep::Wildcard,
                ResolutionStep::Default
            ],
            default_fee,
        }
    }

    /// Custom chain. The default fee still applies when no step matches.
    pub fn with_steps(
        steps: impl IntoIterator<Item = ResolutionStep>,
        default_fee: Money<'static, Currency>,
    ) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            default_fee,
        }
    }

    /// Steps in evaluation order
    pub fn steps(&self) -> &[ResolutionStep] {
        &self.steps
    }

    /// Fee used when nothing else matches
    pub fn default_fee(&self) -> Money<'static, Currency> {
        self.default_fee
    }

    /// Resolve the fee for a single origin and destination.
    ///
    /// # Errors
    ///
    /// Returns the route source's error if a lookup fails. Lookups after a failure are not
    /// attempted.
    pub async fn resolve<R: FeeRoutes + ?Sized>(
        &self,
        routes: &R,
        from_city: &str,
        to_region: &str,
    ) -> Result<ResolvedFee, R::Error> {
        for &step in &self.steps {
            if let Some(fee) = step
                .try_resolve(routes, from_city, to_region, self.default_fee)
                .await?
            {
                return Ok(ResolvedFee { fee, source: step });
            }
        }

        Ok(ResolvedFee {
            fee: self.default_fee,
            source: ResolutionStep::Default,
        })
    }
}
