//! Home-chain bridge integration tests.
//!
//! Wires the bridge to a mock home token (pausable, settable multiplier) and
//! a mock messenger. Covers deposits and their wire scaling, withdrawal
//! finalization, the u-turn compensation when an escrow release fails, the
//! rebase relay and upgrade directives.

use cosmwasm_std::{to_json_binary, Addr, Binary, Uint128, WasmMsg};
use cw20::{BalanceResponse, Cw20Coin};
use cw_multi_test::{App, ContractWrapper, Executor};
use serde::Serialize;

use common::foreign_bridge::ExecuteMsg as ForeignBridgeExecuteMsg;
use common::home_bridge::{ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg};
use common::testing::{home_token as mock_token, messenger as mock_messenger};
use common::token::InflationMultiplierResponse;

const FOREIGN_BRIDGE: &str = "0xforeign_bridge";
const FOREIGN_TOKEN: &str = "0xforeign_token";

// ============================================================================
// Test Setup
// ============================================================================

fn contract_bridge() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        home_bridge::contract::execute,
        home_bridge::contract::instantiate,
        home_bridge::contract::query,
    )
    .with_reply(home_bridge::contract::reply)
    .with_migrate(home_bridge::contract::migrate);
    Box::new(contract)
}

fn contract_token() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        mock_token::execute,
        mock_token::instantiate,
        mock_token::query,
    );
    Box::new(contract)
}

fn contract_messenger() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        mock_messenger::execute,
        mock_messenger::instantiate,
        mock_messenger::query,
    );
    Box::new(contract)
}

struct TestEnv {
    app: App,
    messenger: Addr,
    bridge: Addr,
    token: Addr,
    deployer: Addr,
    upgrader: Addr,
    alice: Addr,
    bob: Addr,
}

/// Home chain at inflation multiplier 10, alice funded with 1_000_000.
fn setup() -> TestEnv {
    let mut app = App::default();
    let deployer = Addr::unchecked("deployer");
    let upgrader = Addr::unchecked("upgrader");
    let alice = Addr::unchecked("alice");
    let bob = Addr::unchecked("bob");

    let messenger_code_id = app.store_code(contract_messenger());
    let messenger = app
        .instantiate_contract(
            messenger_code_id,
            deployer.clone(),
            &mock_messenger::InstantiateMsg {},
            &[],
            "messenger",
            None,
        )
        .unwrap();

    let token_code_id = app.store_code(contract_token());
    let token = app
        .instantiate_contract(
            token_code_id,
            deployer.clone(),
            &mock_token::InstantiateMsg {
                initial_balances: vec![Cw20Coin {
                    address: alice.to_string(),
                    amount: Uint128::from(1_000_000u128),
                }],
                inflation_multiplier: Uint128::from(10u128),
            },
            &[],
            "home-token",
            None,
        )
        .unwrap();

    let bridge_code_id = app.store_code(contract_bridge());
    let bridge = app
        .instantiate_contract(
            bridge_code_id,
            deployer.clone(),
            &InstantiateMsg {
                messenger: messenger.to_string(),
                foreign_bridge: FOREIGN_BRIDGE.to_string(),
                token: token.to_string(),
                foreign_token: FOREIGN_TOKEN.to_string(),
                upgrader: upgrader.to_string(),
            },
            &[],
            "home-bridge",
            Some(deployer.to_string()),
        )
        .unwrap();

    TestEnv {
        app,
        messenger,
        bridge,
        token,
        deployer,
        upgrader,
        alice,
        bob,
    }
}

fn relay<T: Serialize>(
    env: &mut TestEnv,
    sender: &str,
    msg: &T,
) -> anyhow::Result<cw_multi_test::AppResponse> {
    env.app.execute_contract(
        Addr::unchecked("relayer"),
        env.messenger.clone(),
        &mock_messenger::ExecuteMsg::Relay {
            sender: sender.to_string(),
            target: env.bridge.to_string(),
            message: to_json_binary(msg)?,
        },
        &[],
    )
}

fn token_balance(env: &TestEnv, addr: &Addr) -> Uint128 {
    let res: BalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.token,
            &mock_token::QueryMsg::Balance {
                address: addr.to_string(),
            },
        )
        .unwrap();
    res.balance
}

fn sent_messages(env: &TestEnv) -> Vec<mock_messenger::SentMessage> {
    let res: mock_messenger::SentMessagesResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.messenger, &mock_messenger::QueryMsg::SentMessages {})
        .unwrap();
    res.messages
}

fn deposit(env: &mut TestEnv, amount: u128) {
    env.app
        .execute_contract(
            env.alice.clone(),
            env.bridge.clone(),
            &ExecuteMsg::Deposit {
                token: env.token.to_string(),
                foreign_token: FOREIGN_TOKEN.to_string(),
                amount: Uint128::from(amount),
                min_gas_limit: 200_000,
                extra_data: Binary::default(),
            },
            &[],
        )
        .unwrap();
}

fn finalize_withdrawal_msg(env: &TestEnv, to: &Addr, wire_amount: u128) -> ExecuteMsg {
    ExecuteMsg::FinalizeWithdrawal {
        home_token: env.token.to_string(),
        foreign_token: FOREIGN_TOKEN.to_string(),
        from: "0xremote_sender".to_string(),
        to: to.to_string(),
        amount: Uint128::from(wire_amount),
        extra_data: Binary::default(),
    }
}

fn has_attr(res: &cw_multi_test::AppResponse, key: &str, value: &str) -> bool {
    res.events
        .iter()
        .flat_map(|e| &e.attributes)
        .any(|a| a.key == key && a.value == value)
}

// ============================================================================
// Deposits
// ============================================================================

#[test]
fn test_deposit_escrows_and_messages_foreign_in_wire_units() {
    let mut env = setup();

    deposit(&mut env, 500_000);

    // escrow moved into the bridge
    assert_eq!(token_balance(&env, &env.alice), Uint128::from(500_000u128));
    assert_eq!(token_balance(&env, &env.bridge), Uint128::from(500_000u128));

    // the wire carries amount x multiplier (500_000 x 10)
    let sent = sent_messages(&env);
    let last = sent.last().unwrap();
    assert_eq!(last.target, FOREIGN_BRIDGE);
    assert_eq!(last.gas_limit, 200_000);

    let expected = ForeignBridgeExecuteMsg::FinalizeDeposit {
        home_token: env.token.to_string(),
        foreign_token: FOREIGN_TOKEN.to_string(),
        from: env.alice.to_string(),
        to: env.alice.to_string(),
        amount: Uint128::from(5_000_000u128),
        extra_data: Binary::default(),
    };
    assert_eq!(last.message, to_json_binary(&expected).unwrap());
}

#[test]
fn test_deposit_to_names_a_different_recipient() {
    let mut env = setup();

    env.app
        .execute_contract(
            env.alice.clone(),
            env.bridge.clone(),
            &ExecuteMsg::DepositTo {
                token: env.token.to_string(),
                foreign_token: FOREIGN_TOKEN.to_string(),
                recipient: "0xbob_foreign".to_string(),
                amount: Uint128::from(1000u128),
                min_gas_limit: 100_000,
                extra_data: Binary::default(),
            },
            &[],
        )
        .unwrap();

    let sent = sent_messages(&env);
    let expected = ForeignBridgeExecuteMsg::FinalizeDeposit {
        home_token: env.token.to_string(),
        foreign_token: FOREIGN_TOKEN.to_string(),
        from: env.alice.to_string(),
        to: "0xbob_foreign".to_string(),
        amount: Uint128::from(10_000u128),
        extra_data: Binary::default(),
    };
    assert_eq!(sent.last().unwrap().message, to_json_binary(&expected).unwrap());
}

#[test]
fn test_deposit_emits_full_argument_tuple() {
    let mut env = setup();

    let extra_data = Binary::from(b"memo".to_vec());
    let res = env
        .app
        .execute_contract(
            env.alice.clone(),
            env.bridge.clone(),
            &ExecuteMsg::Deposit {
                token: env.token.to_string(),
                foreign_token: FOREIGN_TOKEN.to_string(),
                amount: Uint128::from(1000u128),
                min_gas_limit: 100_000,
                extra_data: extra_data.clone(),
            },
            &[],
        )
        .unwrap();

    assert!(has_attr(&res, "method", "deposit"));
    assert!(has_attr(&res, "home_token", env.token.as_str()));
    assert!(has_attr(&res, "foreign_token", FOREIGN_TOKEN));
    assert!(has_attr(&res, "from", env.alice.as_str()));
    assert!(has_attr(&res, "to", env.alice.as_str()));
    assert!(has_attr(&res, "amount", "1000"));
    assert!(has_attr(&res, "wire_amount", "10000"));
    assert!(has_attr(&res, "extra_data", &extra_data.to_base64()));
}

#[test]
fn test_deposit_with_wrong_token_pairing_rejected() {
    let mut env = setup();

    let res = env.app.execute_contract(
        env.alice.clone(),
        env.bridge.clone(),
        &ExecuteMsg::Deposit {
            token: "wrong_token".to_string(),
            foreign_token: FOREIGN_TOKEN.to_string(),
            amount: Uint128::from(1000u128),
            min_gas_limit: 100_000,
            extra_data: Binary::default(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("invalid home token"), "{}", err_str);

    let res = env.app.execute_contract(
        env.alice.clone(),
        env.bridge.clone(),
        &ExecuteMsg::Deposit {
            token: env.token.to_string(),
            foreign_token: "0xwrong_foreign".to_string(),
            amount: Uint128::from(1000u128),
            min_gas_limit: 100_000,
            extra_data: Binary::default(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("invalid foreign token"), "{}", err_str);
}

#[test]
fn test_deposit_from_contract_account_rejected() {
    let mut env = setup();

    // drive the deposit from a contract address (the messenger itself)
    let msg = ExecuteMsg::Deposit {
        token: env.token.to_string(),
        foreign_token: FOREIGN_TOKEN.to_string(),
        amount: Uint128::from(1000u128),
        min_gas_limit: 100_000,
        extra_data: Binary::default(),
    };
    let res = env.app.execute_contract(
        Addr::unchecked("relayer"),
        env.messenger.clone(),
        &mock_messenger::ExecuteMsg::Relay {
            sender: "anyone".to_string(),
            target: env.bridge.to_string(),
            message: to_json_binary(&msg).unwrap(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("not EOA"), "{}", err_str);
}

// ============================================================================
// Withdrawal Finalization
// ============================================================================

#[test]
fn test_finalize_withdrawal_requires_messenger_and_counterpart() {
    let mut env = setup();

    let bob = env.bob.clone();
    let msg = finalize_withdrawal_msg(&env, &bob, 1000);
    let res = env
        .app
        .execute_contract(env.alice.clone(), env.bridge.clone(), &msg, &[]);
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("messenger contract unauthenticated"),
        "{}",
        err_str
    );

    let res = relay(&mut env, "0xmallory", &msg);
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("wrong sender of cross-domain message"),
        "{}",
        err_str
    );
}

#[test]
fn test_finalize_withdrawal_releases_wire_amount_over_multiplier() {
    let mut env = setup();

    deposit(&mut env, 500_000);

    let bob = env.bob.clone();
    let msg = finalize_withdrawal_msg(&env, &bob, 5_000_000);
    let res = relay(&mut env, FOREIGN_BRIDGE, &msg).unwrap();

    // 5_000_000 wire units at multiplier 10 release 500_000
    assert_eq!(token_balance(&env, &env.bob), Uint128::from(500_000u128));
    assert_eq!(token_balance(&env, &env.bridge), Uint128::zero());
    assert!(has_attr(&res, "method", "withdrawal_finalized"));
    assert!(has_attr(&res, "home_token", env.token.as_str()));
    assert!(has_attr(&res, "foreign_token", FOREIGN_TOKEN));
    assert!(has_attr(&res, "from", "0xremote_sender"));
    assert!(has_attr(&res, "to", env.bob.as_str()));
    assert!(has_attr(&res, "amount", "500000"));
}

#[test]
fn test_finalize_withdrawal_with_wrong_pairing_rejected() {
    let mut env = setup();

    let msg = ExecuteMsg::FinalizeWithdrawal {
        home_token: "wrong_token".to_string(),
        foreign_token: FOREIGN_TOKEN.to_string(),
        from: "0xremote_sender".to_string(),
        to: env.bob.to_string(),
        amount: Uint128::from(1000u128),
        extra_data: Binary::default(),
    };
    let res = relay(&mut env, FOREIGN_BRIDGE, &msg);
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("invalid home token"), "{}", err_str);
}

// ============================================================================
// U-Turn Compensation
// ============================================================================

#[test]
fn test_failed_release_degrades_to_uturn_instead_of_rejecting() {
    let mut env = setup();

    deposit(&mut env, 500_000);

    // freeze the escrow so the release transfer fails
    env.app
        .execute_contract(
            env.deployer.clone(),
            env.token.clone(),
            &mock_token::ExecuteMsg::SetPaused { paused: true },
            &[],
        )
        .unwrap();

    let extra_data = Binary::from(b"memo".to_vec());
    let msg = ExecuteMsg::FinalizeWithdrawal {
        home_token: env.token.to_string(),
        foreign_token: FOREIGN_TOKEN.to_string(),
        from: "0xremote_sender".to_string(),
        to: env.bob.to_string(),
        amount: Uint128::from(5_000_000u128),
        extra_data: extra_data.clone(),
    };
    // the delivery itself succeeds: the failure is absorbed, not propagated
    let res = relay(&mut env, FOREIGN_BRIDGE, &msg).unwrap();

    assert!(has_attr(&res, "method", "withdrawal_failed"));
    assert!(has_attr(&res, "home_token", env.token.as_str()));
    assert!(has_attr(&res, "foreign_token", FOREIGN_TOKEN));
    assert!(has_attr(&res, "from", "0xremote_sender"));
    assert!(has_attr(&res, "to", env.bob.as_str()));
    assert!(has_attr(&res, "amount", "5000000"));
    assert!(has_attr(&res, "extra_data", &extra_data.to_base64()));
    assert_eq!(token_balance(&env, &env.bob), Uint128::zero());
    assert_eq!(token_balance(&env, &env.bridge), Uint128::from(500_000u128));

    // the compensating deposit re-mints to the original sender, carrying the
    // original wire amount and extra data, with a zero gas limit
    let sent = sent_messages(&env);
    let last = sent.last().unwrap();
    assert_eq!(last.target, FOREIGN_BRIDGE);
    assert_eq!(last.gas_limit, 0);

    let expected = ForeignBridgeExecuteMsg::FinalizeDeposit {
        home_token: env.token.to_string(),
        foreign_token: FOREIGN_TOKEN.to_string(),
        from: "0xremote_sender".to_string(),
        to: "0xremote_sender".to_string(),
        amount: Uint128::from(5_000_000u128),
        extra_data,
    };
    assert_eq!(last.message, to_json_binary(&expected).unwrap());
}

#[test]
fn test_uturn_does_not_fire_on_successful_release() {
    let mut env = setup();

    deposit(&mut env, 500_000);
    let before = sent_messages(&env).len();

    let bob = env.bob.clone();
    let msg = finalize_withdrawal_msg(&env, &bob, 5_000_000);
    relay(&mut env, FOREIGN_BRIDGE, &msg).unwrap();

    // no new outbound message beyond the deposit's
    assert_eq!(sent_messages(&env).len(), before);
}

// ============================================================================
// Rebase Relay
// ============================================================================

#[test]
fn test_rebase_reads_token_and_relays_multiplier() {
    let mut env = setup();

    env.app
        .execute_contract(
            env.deployer.clone(),
            env.token.clone(),
            &mock_token::ExecuteMsg::SetInflationMultiplier {
                inflation_multiplier: Uint128::from(20u128),
            },
            &[],
        )
        .unwrap();

    // permissionless: any caller may trigger the relay
    env.app
        .execute_contract(
            env.alice.clone(),
            env.bridge.clone(),
            &ExecuteMsg::Rebase {
                min_gas_limit: 150_000,
            },
            &[],
        )
        .unwrap();

    let cached: InflationMultiplierResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.bridge, &QueryMsg::InflationMultiplier {})
        .unwrap();
    assert_eq!(cached.inflation_multiplier, Uint128::from(20u128));

    let sent = sent_messages(&env);
    let last = sent.last().unwrap();
    assert_eq!(last.target, FOREIGN_BRIDGE);
    assert_eq!(last.gas_limit, 150_000);
    let expected = ForeignBridgeExecuteMsg::Rebase {
        inflation_multiplier: Uint128::from(20u128),
    };
    assert_eq!(last.message, to_json_binary(&expected).unwrap());
}

#[test]
fn test_rebase_changes_wire_scaling_for_later_deposits() {
    let mut env = setup();

    env.app
        .execute_contract(
            env.deployer.clone(),
            env.token.clone(),
            &mock_token::ExecuteMsg::SetInflationMultiplier {
                inflation_multiplier: Uint128::from(2u128),
            },
            &[],
        )
        .unwrap();
    env.app
        .execute_contract(
            env.alice.clone(),
            env.bridge.clone(),
            &ExecuteMsg::Rebase {
                min_gas_limit: 100_000,
            },
            &[],
        )
        .unwrap();

    deposit(&mut env, 1000);

    let sent = sent_messages(&env);
    let expected = ForeignBridgeExecuteMsg::FinalizeDeposit {
        home_token: env.token.to_string(),
        foreign_token: FOREIGN_TOKEN.to_string(),
        from: env.alice.to_string(),
        to: env.alice.to_string(),
        amount: Uint128::from(2000u128),
        extra_data: Binary::default(),
    };
    assert_eq!(sent.last().unwrap().message, to_json_binary(&expected).unwrap());
}

// ============================================================================
// Upgrade Directives
// ============================================================================

#[test]
fn test_upgrade_directives_are_upgrader_only() {
    let mut env = setup();

    let res = env.app.execute_contract(
        env.alice.clone(),
        env.bridge.clone(),
        &ExecuteMsg::UpgradeForeignToken {
            code_id: 7,
            min_gas_limit: 100_000,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("not authorized to upgrade"), "{}", err_str);

    let res = env.app.execute_contract(
        env.alice.clone(),
        env.bridge.clone(),
        &ExecuteMsg::UpgradeForeignBridge {
            code_id: 7,
            min_gas_limit: 100_000,
        },
        &[],
    );
    assert!(res.is_err());
}

#[test]
fn test_upgrade_directives_message_the_foreign_bridge() {
    let mut env = setup();

    env.app
        .execute_contract(
            env.upgrader.clone(),
            env.bridge.clone(),
            &ExecuteMsg::UpgradeForeignToken {
                code_id: 42,
                min_gas_limit: 300_000,
            },
            &[],
        )
        .unwrap();

    let sent = sent_messages(&env);
    let last = sent.last().unwrap();
    assert_eq!(last.target, FOREIGN_BRIDGE);
    assert_eq!(last.gas_limit, 300_000);
    let expected = ForeignBridgeExecuteMsg::UpgradeToken { code_id: 42 };
    assert_eq!(last.message, to_json_binary(&expected).unwrap());

    env.app
        .execute_contract(
            env.upgrader.clone(),
            env.bridge.clone(),
            &ExecuteMsg::UpgradeForeignBridge {
                code_id: 43,
                min_gas_limit: 300_000,
            },
            &[],
        )
        .unwrap();

    let sent = sent_messages(&env);
    let expected = ForeignBridgeExecuteMsg::UpgradeSelf { code_id: 43 };
    assert_eq!(sent.last().unwrap().message, to_json_binary(&expected).unwrap());
}

#[test]
fn test_upgrade_self_requires_self_administration() {
    let mut env = setup();

    let new_code_id = env.app.store_code(contract_bridge());
    let res = env.app.execute_contract(
        env.upgrader.clone(),
        env.bridge.clone(),
        &ExecuteMsg::UpgradeSelf {
            code_id: new_code_id,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("not the owner of the upgrade authority"),
        "{}",
        err_str
    );

    // hand the bridge its own admin rights, then the upgrade goes through
    env.app
        .execute(
            env.deployer.clone(),
            WasmMsg::UpdateAdmin {
                contract_addr: env.bridge.to_string(),
                admin: env.bridge.to_string(),
            }
            .into(),
        )
        .unwrap();

    env.app
        .execute_contract(
            env.upgrader.clone(),
            env.bridge.clone(),
            &ExecuteMsg::UpgradeSelf {
                code_id: new_code_id,
            },
            &[],
        )
        .unwrap();

    let info = env
        .app
        .wrap()
        .query_wasm_contract_info(env.bridge.to_string())
        .unwrap();
    assert_eq!(info.code_id, new_code_id);

    // state survives the migration
    let config: ConfigResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.bridge, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.foreign_bridge, FOREIGN_BRIDGE);
    assert_eq!(config.upgrader, env.upgrader.to_string());
}
