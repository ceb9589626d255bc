//! Active network selection
//!
//! [`NetworkSelector`] holds the parameters a component runs against. It
//! starts unselected, accepts exactly one selection until it is reset, and
//! only hands out mutable access for the unit-test network. [`select_params`]
//! and [`params`] provide the same contract process-wide through a
//! write-once cell.

use crate::network::NetworkType;
use crate::overrides::{Flag, Override};
use crate::params::ChainParams;
use crate::{Error, Result};
use once_cell::sync::OnceCell;
use std::ops::Deref;

/// Unit-test parameters with their published setters
///
/// Owned by the selector, so changes never reach the shared registry copy.
#[derive(Debug, Clone)]
pub struct UnitTestParams {
    params: ChainParams,
}

impl UnitTestParams {
    fn new() -> Self {
        Self {
            params: ChainParams::for_network(NetworkType::UnitTest).clone(),
        }
    }

    /// Set the upgrade enforcement threshold
    pub fn set_enforce_block_upgrade_majority(&mut self, value: u32) {
        self.params.apply(Override::EnforceBlockUpgradeMajority(value));
    }

    /// Set the outdated-block rejection threshold
    pub fn set_reject_block_outdated_majority(&mut self, value: u32) {
        self.params.apply(Override::RejectBlockOutdatedMajority(value));
    }

    /// Set the upgrade signalling window
    pub fn set_to_check_block_upgrade_majority(&mut self, value: u32) {
        self.params.apply(Override::ToCheckBlockUpgradeMajority(value));
    }

    /// Toggle default consistency checks
    pub fn set_default_consistency_checks(&mut self, value: bool) {
        self.params
            .apply(Override::Flag(Flag::DefaultConsistencyChecks, value));
    }

    /// Toggle minimum-difficulty blocks
    pub fn set_allow_min_difficulty_blocks(&mut self, value: bool) {
        self.params
            .apply(Override::Flag(Flag::AllowMinDifficultyBlocks, value));
    }

    /// Toggle proof-of-work checking
    pub fn set_skip_proof_of_work_check(&mut self, value: bool) {
        self.params
            .apply(Override::Flag(Flag::SkipProofOfWorkCheck, value));
    }
}

impl Deref for UnitTestParams {
    type Target = ChainParams;

    fn deref(&self) -> &ChainParams {
        &self.params
    }
}

#[derive(Debug)]
enum Active {
    Shared(&'static ChainParams),
    UnitTest(Box<UnitTestParams>),
}

impl Active {
    fn params(&self) -> &ChainParams {
        match self {
            Active::Shared(params) => params,
            Active::UnitTest(params) => params,
        }
    }
}

/// Holder of the active parameter set
#[derive(Debug, Default)]
pub struct NetworkSelector {
    active: Option<Active>,
}

impl NetworkSelector {
    /// Create an unselected selector
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `network` active
    ///
    /// # Panics
    ///
    /// If a network is already selected. Call [`reset`](Self::reset) first.
    pub fn select(&mut self, network: NetworkType) {
        if let Some(active) = &self.active {
            let current = active.params().network();
            tracing::error!(%current, requested = %network, "network selected twice");
            panic!("network parameters already selected ({current}); cannot select {network}");
        }
        let active = match network {
            NetworkType::UnitTest => Active::UnitTest(Box::new(UnitTestParams::new())),
            other => Active::Shared(ChainParams::for_network(other)),
        };
        tracing::info!(%network, "selected chain parameters");
        self.active = Some(active);
    }

    /// Make the network named `id` active
    pub fn select_by_id(&mut self, id: &str) -> Result<NetworkType> {
        let network: NetworkType = id.parse()?;
        self.select(network);
        Ok(network)
    }

    /// Make the network chosen by `-testnet` / `-regtest` active
    pub fn select_from_flags(&mut self, testnet: bool, regtest: bool) -> Result<NetworkType> {
        let network = NetworkType::from_flags(testnet, regtest)?;
        self.select(network);
        Ok(network)
    }

    /// Active parameters
    ///
    /// # Panics
    ///
    /// If nothing is selected.
    pub fn current(&self) -> &ChainParams {
        match &self.active {
            Some(active) => active.params(),
            None => unselected("current"),
        }
    }

    /// Mutable handle on the unit-test parameters
    ///
    /// # Panics
    ///
    /// If nothing is selected.
    pub fn current_as_mutable(&mut self) -> Result<&mut UnitTestParams> {
        match &mut self.active {
            Some(Active::UnitTest(params)) => Ok(&mut **params),
            Some(Active::Shared(params)) => {
                let active = params.network();
                tracing::warn!(%active, "refused mutable access to chain parameters");
                Err(Error::UnauthorizedMutation { active })
            }
            None => unselected("current_as_mutable"),
        }
    }

    /// Active network, if any
    pub fn network(&self) -> Option<NetworkType> {
        self.active.as_ref().map(|active| active.params().network())
    }

    /// Check if a network is selected
    pub fn is_selected(&self) -> bool {
        self.active.is_some()
    }

    /// Return to the unselected state, dropping unit-test changes
    pub fn reset(&mut self) {
        self.active = None;
    }
}

fn unselected(operation: &str) -> ! {
    tracing::error!(operation, "chain parameters read before selection");
    panic!("{operation}() called before any network was selected");
}

static ACTIVE: OnceCell<&'static ChainParams> = OnceCell::new();

/// Publish the process-wide active network
///
/// The unit-test network is published as its shared, unmodified instance;
/// mutation goes through a [`NetworkSelector`].
///
/// # Panics
///
/// If a network was already published.
pub fn select_params(network: NetworkType) -> &'static ChainParams {
    let params = ChainParams::for_network(network);
    if ACTIVE.set(params).is_err() {
        let current = ACTIVE.get().map(|p| p.network());
        tracing::error!(?current, requested = %network, "global network selected twice");
        panic!("process-wide network already selected; cannot select {network}");
    }
    tracing::info!(%network, "published process-wide chain parameters");
    params
}

/// Process-wide active parameters
///
/// # Panics
///
/// If [`select_params`] has not run.
pub fn params() -> &'static ChainParams {
    match ACTIVE.get() {
        Some(params) => params,
        None => unselected("params"),
    }
}

/// Process-wide active parameters, if published
pub fn try_params() -> Option<&'static ChainParams> {
    ACTIVE.get().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_then_current() {
        let mut selector = NetworkSelector::new();
        assert!(!selector.is_selected());
        selector.select(NetworkType::Main);
        assert_eq!(selector.current().network(), NetworkType::Main);
        assert_eq!(selector.network(), Some(NetworkType::Main));
    }

    #[test]
    #[should_panic(expected = "before any network was selected")]
    fn test_current_before_select_panics() {
        NetworkSelector::new().current();
    }

    #[test]
    #[should_panic(expected = "already selected")]
    fn test_double_select_panics() {
        let mut selector = NetworkSelector::new();
        selector.select(NetworkType::Main);
        selector.select(NetworkType::Testnet);
    }

    #[test]
    fn test_reset_allows_reselect() {
        let mut selector = NetworkSelector::new();
        selector.select(NetworkType::Main);
        selector.reset();
        assert!(!selector.is_selected());
        selector.select(NetworkType::Regtest);
        assert_eq!(selector.current().network(), NetworkType::Regtest);
    }

    #[test]
    fn test_select_by_id() {
        let mut selector = NetworkSelector::new();
        let err = selector.select_by_id("mainnet").unwrap_err();
        assert!(matches!(err, Error::UnimplementedNetwork(_)));
        assert!(!selector.is_selected());
        assert_eq!(selector.select_by_id("test").unwrap(), NetworkType::Testnet);
    }

    #[test]
    fn test_select_from_flags() {
        let mut selector = NetworkSelector::new();
        assert!(selector.select_from_flags(true, true).is_err());
        assert!(!selector.is_selected());
        assert_eq!(selector.select_from_flags(false, true).unwrap(), NetworkType::Regtest);
    }

    #[test]
    fn test_mutation_refused_outside_unittest() {
        let mut selector = NetworkSelector::new();
        selector.select(NetworkType::Testnet);
        let err = selector.current_as_mutable().unwrap_err();
        assert!(matches!(
            err,
            Error::UnauthorizedMutation {
                active: NetworkType::Testnet
            }
        ));
    }

    #[test]
    fn test_unittest_setters() {
        let mut selector = NetworkSelector::new();
        selector.select(NetworkType::UnitTest);
        let params = selector.current_as_mutable().unwrap();
        params.set_enforce_block_upgrade_majority(500);
        params.set_reject_block_outdated_majority(600);
        params.set_to_check_block_upgrade_majority(700);
        params.set_default_consistency_checks(false);
        params.set_allow_min_difficulty_blocks(true);
        params.set_skip_proof_of_work_check(true);

        let current = selector.current();
        assert_eq!(current.consensus().enforce_block_upgrade_majority, 500);
        assert_eq!(current.consensus().reject_block_outdated_majority, 600);
        assert_eq!(current.consensus().to_check_block_upgrade_majority, 700);
        assert!(!current.default_consistency_checks());
        assert!(current.allow_min_difficulty_blocks());
        assert!(current.skip_proof_of_work_check());

        let shared = ChainParams::for_network(NetworkType::UnitTest);
        assert_eq!(shared.consensus().enforce_block_upgrade_majority, 750);
        assert!(!shared.skip_proof_of_work_check());
    }

    #[test]
    fn test_reset_discards_changes() {
        let mut selector = NetworkSelector::new();
        selector.select(NetworkType::UnitTest);
        selector
            .current_as_mutable()
            .unwrap()
            .set_enforce_block_upgrade_majority(1);
        selector.reset();
        selector.select(NetworkType::UnitTest);
        assert_eq!(selector.current().consensus().enforce_block_upgrade_majority, 750);
    }
}
