//! Dispatcher scenarios that need no node: input-shape handling, native
//! value attachment, bond param forwarding.

use alloy::primitives::{Address, Bytes, U256, address};
use alloy::sol_types::SolCall;
use zap_trade_sdk::contracts::{BondParams, IZapRouter, SwapParams, SwapPath, ZapParams};
use zap_trade_sdk::{
    BondZapInput, Chain, DispatchOptions, NATIVE_ADDRESS, SwapInput, ZapError, native_call_value,
};

mod test_helpers;
use test_helpers::{test_client, test_provider};

#[test]
fn native_value_equals_amount_in_only_for_the_sentinel() {
    for amount in [0u64, 1, 1_000_000, u64::MAX] {
        let amount = U256::from(amount);
        assert_eq!(native_call_value(NATIVE_ADDRESS, amount), amount);
        assert_eq!(native_call_value(Address::ZERO, amount), U256::ZERO);
        assert_eq!(
            native_call_value(address!("bb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"), amount),
            U256::ZERO
        );
    }
}

#[tokio::test]
async fn encoded_payloads_are_rejected_before_any_submission() {
    let client = test_client(Chain::Bnb);
    for payload in ["", "0xdeadbeef", "not even hex"] {
        let input = SwapInput::Encoded(Bytes::from(payload.as_bytes().to_vec()));
        let err = client.swap(input, DispatchOptions::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Param not yet supported");
    }
}

#[tokio::test]
async fn quoted_dispatch_short_circuits_an_incoming_failure() {
    let client = test_client(Chain::Bnb);
    let failure = Err(ZapError::ContractCall("Something went wrong".to_string()));
    let err = client.swap_quoted(failure, DispatchOptions::default()).await.unwrap_err();
    assert_eq!(err, ZapError::ContractCall("Something went wrong".to_string()));
}

#[test]
fn swap_call_attaches_native_value_for_sentinel_input() {
    let amount = U256::from(1_000_000u64);
    let swap_params =
        SwapParams { tokenIn: NATIVE_ADDRESS, amountIn: amount, ..Default::default() };
    let value = native_call_value(swap_params.tokenIn, swap_params.amountIn);

    let router = IZapRouter::new(Address::repeat_byte(0x11), test_provider());
    let request = router.swap(swap_params, SwapPath::default()).value(value).into_transaction_request();
    assert_eq!(request.value, Some(amount));
}

#[test]
fn swap_call_attaches_zero_value_for_erc20_input() {
    let swap_params = SwapParams {
        tokenIn: address!("2791Bca1f2de4661ED88A30C99A7a9449Aa84174"),
        amountIn: U256::from(1_000_000u64),
        ..Default::default()
    };
    let value = native_call_value(swap_params.tokenIn, swap_params.amountIn);

    let router = IZapRouter::new(Address::repeat_byte(0x11), test_provider());
    let request = router.swap(swap_params, SwapPath::default()).value(value).into_transaction_request();
    assert_eq!(request.value, Some(U256::ZERO));
}

#[test]
fn zap_bond_call_forwards_bond_params_and_native_value() {
    let amount = U256::from(5_000_000u64);
    let zap_params = ZapParams { tokenIn: NATIVE_ADDRESS, amountIn: amount, ..Default::default() };
    let bond_params = BondParams {
        bond: address!("00000000000000000000000000000000000000b0"),
        maxPrice: U256::from(777u64),
    };
    let value = native_call_value(zap_params.tokenIn, zap_params.amountIn);

    let router = IZapRouter::new(Address::repeat_byte(0x11), test_provider());
    let call = router.zapBond(zap_params, SwapPath::default(), bond_params.bond, bond_params.maxPrice);
    let request = call.value(value).into_transaction_request();
    assert_eq!(request.value, Some(amount));

    // The bond address and max price survive in the calldata.
    let input = request.input.input().expect("calldata present");
    let decoded = IZapRouter::zapBondCall::abi_decode(input).expect("decodes as zapBond");
    assert_eq!(decoded.bond, bond_params.bond);
    assert_eq!(decoded.maxPrice, bond_params.maxPrice);
}

#[tokio::test]
async fn bond_zap_raw_input_is_accepted_shape() {
    // Unregistered router: the configuration error fires before any network
    // traffic, proving the raw shape itself is accepted.
    let client = test_client(Chain::Ethereum);
    let input = BondZapInput::Raw {
        zap_params: ZapParams::default(),
        fee_leg: SwapPath::default(),
        bond_params: BondParams::default(),
    };
    let err = client.zap_bond(input, DispatchOptions::default()).await.unwrap_err();
    assert_eq!(err.to_string(), "Zap contract not found for ethereum");
}
