//! End-to-end token scenarios
//!
//! Deploy, administer and use a token the way a host chain would, one caller per call.

use fungible_token::{
    pair_up, Address, FungibleToken, ReceiverContext, TokenConfig, TokenError, TokenReceiver, U256,
};

const CEO: Address = Address::from_seed(0x01);
const USER1: Address = Address::from_seed(0x02);
const USER2: Address = Address::from_seed(0x03);
const USER3: Address = Address::from_seed(0x04);
const TOKEN: Address = Address::from_seed(0xaa);

fn deploy() -> FungibleToken {
    FungibleToken::new(TokenConfig::new("name", "symbol"), CEO, TOKEN).expect("valid config")
}

fn amount(n: u64) -> U256 {
    U256::from(n)
}

#[test]
fn test_total_supply_after_mint() -> Result<(), TokenError> {
    let mut token = deploy();
    token.mint(&CEO, CEO, amount(100))?;
    assert_eq!(token.total_supply(), amount(100));
    Ok(())
}

#[test]
fn test_allowance_after_approval() -> Result<(), TokenError> {
    let mut token = deploy();
    token.approve(&CEO, USER1, amount(100))?;
    assert_eq!(token.allowance(&CEO, &USER1), amount(100));
    Ok(())
}

#[test]
fn test_balances_after_transfer() -> Result<(), TokenError> {
    let mut token = deploy();
    token.mint(&CEO, CEO, amount(100))?;
    token.transfer(&CEO, USER1, amount(100))?;
    assert_eq!(token.balance_of(&CEO), U256::zero());
    assert_eq!(token.balance_of(&USER1), amount(100));

    let err = token.transfer(&CEO, USER1, amount(1)).unwrap_err();
    assert_eq!(err, TokenError::InsufficientBalance);
    assert_eq!(err.to_string(), "ERC20: transfer amount exceeds balance");
    Ok(())
}

#[test]
fn test_transfer_from_more_than_allowed() -> Result<(), TokenError> {
    let mut token = deploy();
    token.mint(&CEO, CEO, amount(100))?;
    token.approve(&CEO, USER1, amount(99))?;

    let err = token
        .transfer_from(&USER1, CEO, USER2, amount(100))
        .unwrap_err();
    assert_eq!(err.to_string(), "ERC20: transfer amount exceeds allowance");
    assert_eq!(token.balance_of(&CEO), amount(100));
    assert_eq!(token.allowance(&CEO, &USER1), amount(99));
    Ok(())
}

#[test]
fn test_transfer_to_token_itself() -> Result<(), TokenError> {
    let mut token = deploy();
    token.mint(&CEO, USER1, amount(100))?;

    let err = token.transfer(&USER1, TOKEN, amount(1)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "FungibleToken: can't transfer to token contract self"
    );
    assert_eq!(
        token.transfer_from(&USER1, USER1, TOKEN, amount(1)),
        Err(TokenError::InsufficientAllowance)
    );
    token.approve(&USER1, USER2, amount(1))?;
    assert_eq!(
        token.transfer_from(&USER2, USER1, TOKEN, amount(1)),
        Err(TokenError::SelfTransferToContract)
    );
    assert_eq!(token.allowance(&USER1, &USER2), amount(1));
    Ok(())
}

#[test]
fn test_pause_and_disable_pause() -> Result<(), TokenError> {
    let mut token = deploy();
    token.mint(&CEO, USER1, amount(100))?;
    token.pause(&CEO)?;
    assert_eq!(token.pause(&CEO).unwrap_err().to_string(), "Pausable: paused");
    assert_eq!(
        token.transfer(&USER1, USER2, amount(1)).unwrap_err().to_string(),
        "ERC20Pausable: token transfer while paused"
    );
    assert_eq!(
        token.burn(&USER1, amount(1)),
        Err(TokenError::TransferWhilePaused)
    );
    // minting is an administrative path and ignores the pause
    token.mint(&CEO, USER2, amount(1))?;

    token.unpause(&CEO)?;
    assert_eq!(
        token.unpause(&CEO).unwrap_err().to_string(),
        "Pausable: not paused"
    );
    token.transfer(&USER1, USER2, amount(1))?;

    token.disable_pause_forever(&CEO)?;
    assert_eq!(
        token.disable_pause_forever(&CEO).unwrap_err().to_string(),
        "Pausable: Pause was already disabled"
    );
    assert_eq!(
        token.pause(&CEO).unwrap_err().to_string(),
        "Pausable: Pause not allowed"
    );
    assert!(!token.is_paused());
    assert!(token.is_pause_disabled());
    Ok(())
}

#[test]
fn test_freeze_and_unfreeze() -> Result<(), TokenError> {
    let mut token = deploy();
    assert!(!token.is_frozen(&USER1));

    token.mint(&CEO, USER1, amount(100))?;
    token.freeze(&CEO, USER1)?;
    assert!(token.is_frozen(&USER1));
    assert_eq!(
        token.transfer(&USER1, USER2, amount(1)).unwrap_err().to_string(),
        "FungibleToken: source address was frozen"
    );
    assert_eq!(
        token.burn(&USER1, amount(1)),
        Err(TokenError::SourceFrozen)
    );

    // a frozen account still receives
    token.mint(&CEO, USER2, amount(5))?;
    token.transfer(&USER2, USER1, amount(5))?;
    assert_eq!(token.balance_of(&USER1), amount(105));

    token.unfreeze(&CEO, USER1)?;
    assert!(!token.is_frozen(&USER1));
    token.transfer(&USER1, USER2, amount(1))?;
    Ok(())
}

#[test]
fn test_frozen_owner_blocks_transfer_from() -> Result<(), TokenError> {
    let mut token = deploy();
    token.mint(&CEO, USER1, amount(100))?;
    token.approve(&USER1, USER2, amount(100))?;
    token.freeze(&CEO, USER1)?;
    assert_eq!(
        token.transfer_from(&USER2, USER1, USER3, amount(1)),
        Err(TokenError::SourceFrozen)
    );
    // the spender being frozen does not matter
    token.unfreeze(&CEO, USER1)?;
    token.freeze(&CEO, USER2)?;
    token.transfer_from(&USER2, USER1, USER3, amount(1))?;
    assert_eq!(token.balance_of(&USER3), amount(1));
    Ok(())
}

#[test]
fn test_disable_freeze() -> Result<(), TokenError> {
    let mut token = deploy();
    token.disable_freeze_forever(&CEO)?;
    assert_eq!(
        token.freeze(&CEO, USER1).unwrap_err().to_string(),
        "FungibleToken: Freeze not allowed"
    );
    assert_eq!(
        token.freeze_and_burn_tokens(&CEO, USER1).unwrap_err().to_string(),
        "FungibleToken: Freeze not allowed"
    );
    assert!(token.is_freeze_disabled());
    Ok(())
}

#[test]
fn test_burn_frozen_tokens() -> Result<(), TokenError> {
    let mut token = deploy();
    token.mint(&CEO, USER1, amount(100))?;
    assert_eq!(
        token.burn_frozen_tokens(&CEO, USER1).unwrap_err().to_string(),
        "FungibleToken: Target account is not frozen"
    );

    token.freeze(&CEO, USER1)?;
    token.disable_freeze_forever(&CEO)?;
    token.burn_frozen_tokens(&CEO, USER1)?;
    assert_eq!(token.balance_of(&USER1), U256::zero());
    assert_eq!(token.total_supply(), U256::zero());
    Ok(())
}

#[test]
fn test_freeze_and_burn_tokens() -> Result<(), TokenError> {
    let mut token = deploy();
    token.mint(&CEO, USER1, amount(100))?;
    token.freeze_and_burn_tokens(&CEO, USER1)?;
    assert_eq!(token.balance_of(&USER1), U256::zero());
    assert_eq!(token.total_supply(), U256::zero());
    assert!(token.is_frozen(&USER1));
    Ok(())
}

#[test]
fn test_bulk_with_parallel_arrays() -> Result<(), TokenError> {
    let mut token = deploy();
    token.mint_add_decimals_bulk(
        &CEO,
        &pair_up(&[USER1, USER2, USER3], &[amount(1), amount(2), amount(3)])?,
    )?;
    let unit = U256::exp10(18);
    assert_eq!(token.balance_of(&USER1), unit);
    assert_eq!(token.balance_of(&USER2), unit * U256::from(2));
    assert_eq!(token.balance_of(&USER3), unit * U256::from(3));
    assert_eq!(token.total_supply(), unit * U256::from(6));

    token.approve_bulk(&USER1, &pair_up(&[USER2, USER3], &[amount(10), amount(20)])?)?;
    assert_eq!(token.allowance(&USER1, &USER2), amount(10));
    assert_eq!(token.allowance(&USER1, &USER3), amount(20));

    assert_eq!(
        pair_up(&[USER1, USER2], &[amount(1)]).unwrap_err().to_string(),
        "FungibleToken: array length mismatch"
    );
    Ok(())
}

#[test]
fn test_access_control_roles() -> Result<(), TokenError> {
    let owner1 = USER1;
    let owner2 = USER2;
    let operator1 = USER3;
    let operator2 = Address::from_seed(0x05);

    let mut token = FungibleToken::new(TokenConfig::new("name", "symbol"), owner1, TOKEN)?;
    assert!(token.is_owner(&owner1));
    assert!(!token.is_owner(&owner2));
    assert!(token.is_operator(&owner1));
    assert!(!token.is_operator(&owner2));

    token.add_owner(&owner1, owner2)?;
    assert!(token.is_owner(&owner2));
    token.remove_owner(&owner1, owner2)?;
    assert!(!token.is_owner(&owner2));
    assert!(!token.is_operator(&owner2));

    token.add_operator(&owner1, operator1)?;
    token.add_operator(&owner1, operator2)?;
    assert!(token.is_operator(&operator1));
    assert!(token.is_operator(&operator2));
    assert!(!token.is_owner(&operator1));
    token.remove_operator(&owner1, operator1)?;
    token.remove_operator(&owner1, operator2)?;
    assert!(!token.is_operator(&operator1));
    assert!(!token.is_operator(&operator2));

    token.set_owner(&owner1, owner2)?;
    assert!(!token.is_owner(&owner1));
    assert!(token.is_owner(&owner2));
    Ok(())
}

#[test]
fn test_snapshot_restores_latches() -> Result<(), TokenError> {
    let mut token = deploy();
    token.mint(&CEO, USER1, amount(10))?;
    token.disable_pause_forever(&CEO)?;
    token.disable_freeze_forever(&CEO)?;

    let mut restored = FungibleToken::from_json(&token.to_json()?)?;
    assert!(restored.is_pause_disabled());
    assert!(restored.is_freeze_disabled());
    assert_eq!(restored.pause(&CEO), Err(TokenError::PauseNotAllowed));
    assert_eq!(restored.freeze(&CEO, USER1), Err(TokenError::FreezeNotAllowed));
    assert_eq!(restored.balance_of(&USER1), amount(10));
    Ok(())
}

struct AcceptAll;

impl TokenReceiver for AcceptAll {
    fn on_tokens_received(
        &mut self,
        _token: &mut ReceiverContext<'_>,
        _from: Address,
        _amount: U256,
        _data: &[u8],
    ) -> Result<(), String> {
        Ok(())
    }
}

/// Every way of moving tokens out of `source`, `spender` holding an allowance on it
fn outbound_moves(
    token: &mut FungibleToken,
    source: Address,
    spender: Address,
) -> Vec<(&'static str, Result<(), TokenError>)> {
    vec![
        ("transfer", token.transfer(&source, USER3, amount(1))),
        (
            "transfer_to_address",
            token.transfer_to_address(&source, USER3, amount(1), &[0x1]),
        ),
        (
            "transfer_to_contract",
            token.transfer_to_contract(&source, USER3, amount(1), &[0x1], &mut AcceptAll),
        ),
        (
            "transfer_bulk",
            token.transfer_bulk(&source, &[(USER3, amount(1)), (CEO, amount(1))]),
        ),
        (
            "transfer_from",
            token.transfer_from(&spender, source, USER3, amount(1)),
        ),
        ("burn", token.burn(&source, amount(1))),
    ]
}

fn funded_with_allowance() -> Result<FungibleToken, TokenError> {
    let mut token = deploy();
    token.mint(&CEO, USER1, amount(100))?;
    token.approve(&USER1, USER2, amount(100))?;
    token.take_events();
    Ok(token)
}

#[test]
fn test_pause_blocks_every_outbound_move() -> Result<(), TokenError> {
    let mut token = funded_with_allowance()?;
    token.pause(&CEO)?;
    token.take_events();

    for (name, result) in outbound_moves(&mut token, USER1, USER2) {
        assert_eq!(result, Err(TokenError::TransferWhilePaused), "{}", name);
    }
    assert_eq!(token.balance_of(&USER1), amount(100));
    assert_eq!(token.allowance(&USER1, &USER2), amount(100));
    assert!(token.take_events().is_empty());

    token.unpause(&CEO)?;
    for (name, result) in outbound_moves(&mut token, USER1, USER2) {
        assert_eq!(result, Ok(()), "{}", name);
    }
    // one unit each, two for the bulk transfer
    assert_eq!(token.balance_of(&USER1), amount(93));
    Ok(())
}

#[test]
fn test_frozen_source_blocks_every_outbound_move() -> Result<(), TokenError> {
    let mut token = funded_with_allowance()?;
    token.freeze(&CEO, USER1)?;
    token.take_events();

    for (name, result) in outbound_moves(&mut token, USER1, USER2) {
        assert_eq!(result, Err(TokenError::SourceFrozen), "{}", name);
    }
    assert_eq!(token.balance_of(&USER1), amount(100));
    assert!(token.take_events().is_empty());

    // another holder is unaffected and may even pay the frozen account
    token.mint(&CEO, USER2, amount(10))?;
    token.transfer_bulk(&USER2, &[(USER1, amount(5))])?;
    token.transfer_to_address(&USER2, USER1, amount(1), &[])?;
    assert_eq!(token.balance_of(&USER1), amount(106));
    Ok(())
}
