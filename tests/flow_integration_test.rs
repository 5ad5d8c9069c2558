use async_trait::async_trait;
use sft_minter::core::dispatch::MinterCommand;
use sft_minter::domain::model::{
    Account, Address, Session, SmartContract, Transaction, TransactionStatus, TxHash,
};
use sft_minter::domain::ports::{
    ContractAddressResolver, NetworkProvider, Prompter, SessionSetup, TransactionSigner,
};
use sft_minter::{FlowOutcome, MinterError, Result, SftMinter};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

const WALLET: &str = "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th";
const CONTRACT: &str = "erd1qqqqqqqqqqqqqpgq7ykazrzd905zvnlr88dpfw06677lxe9w0n4suz00uh";

struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
    rejections: Vec<String>,
}

impl ScriptedPrompter {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
            rejections: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        self.asked.push(label.to_string());
        Ok(self.answers.pop_front())
    }

    fn reject(&mut self, message: &str) -> Result<()> {
        self.rejections.push(message.to_string());
        Ok(())
    }
}

struct FixedResolver(Option<&'static str>);

impl ContractAddressResolver for FixedResolver {
    fn resolve(&self) -> Result<Address> {
        match self.0 {
            Some(address) => Address::parse(address),
            None => Err(MinterError::SessionError {
                message: "no contract deployed".to_string(),
            }),
        }
    }
}

struct StubSigner(Address);

impl TransactionSigner for StubSigner {
    fn address(&self) -> &Address {
        &self.0
    }

    fn sign(&self, _transaction: &Transaction) -> Result<String> {
        Ok("00".repeat(64))
    }
}

#[derive(Clone, Default)]
struct NetworkLog {
    setups: Arc<AtomicUsize>,
    sent: Arc<Mutex<Vec<Transaction>>>,
}

struct StubProvider {
    log: NetworkLog,
    send_error: Option<&'static str>,
}

#[async_trait]
impl NetworkProvider for StubProvider {
    async fn get_account_nonce(&self, _address: &Address) -> Result<u64> {
        Ok(11)
    }

    async fn send_transaction(&self, transaction: &Transaction) -> Result<TxHash> {
        self.log.sent.lock().unwrap().push(transaction.clone());
        match self.send_error {
            Some(message) => Err(MinterError::GatewayError {
                message: message.to_string(),
            }),
            None => Ok(TxHash("c0ffee".to_string())),
        }
    }

    async fn await_completed(&self, _hash: &TxHash) -> Result<TransactionStatus> {
        Ok(TransactionStatus("success".to_string()))
    }
}

struct StubSetup {
    log: NetworkLog,
    send_error: Option<&'static str>,
}

#[async_trait]
impl SessionSetup for StubSetup {
    async fn setup(&self, contract_address: &Address) -> Result<Session> {
        self.log.setups.fetch_add(1, Ordering::SeqCst);
        let wallet = Address::parse(WALLET)?;
        Ok(Session {
            contract: SmartContract {
                address: contract_address.clone(),
                chain_id: "D".to_string(),
                gas_price: 1_000_000_000,
            },
            account: Account {
                address: wallet.clone(),
                nonce: 11,
            },
            signer: Box::new(StubSigner(wallet)),
            provider: Box::new(StubProvider {
                log: self.log.clone(),
                send_error: self.send_error,
            }),
            explorer_url: "https://devnet-explorer.multiversx.com".to_string(),
        })
    }
}

fn minter(
    answers: &[&str],
    send_error: Option<&'static str>,
) -> (SftMinter<ScriptedPrompter, FixedResolver, StubSetup>, NetworkLog) {
    let log = NetworkLog::default();
    let setup = StubSetup {
        log: log.clone(),
        send_error,
    };
    (
        SftMinter::new(ScriptedPrompter::new(answers), FixedResolver(Some(CONTRACT)), setup),
        log,
    )
}

#[tokio::test]
async fn test_short_token_name_never_reaches_confirmation() {
    let (mut minter, log) = minter(&["AB"], None);

    let outcome = minter.issue_collection_token().await;

    assert!(matches!(outcome, FlowOutcome::Aborted));
    assert_eq!(
        minter.prompter().rejections,
        vec!["Length between 3 and 20 characters!"]
    );
    assert!(!minter
        .prompter()
        .asked
        .iter()
        .any(|label| label.starts_with("Are you sure")));
    assert_eq!(log.setups.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_declined_confirmation_builds_and_sends_nothing() {
    let (mut minter, log) = minter(&["MyToken1", "MYTOKEN1", "no"], None);

    let outcome = minter.issue_collection_token().await;

    assert!(matches!(outcome, FlowOutcome::Aborted));
    assert_eq!(outcome.exit_code(), 0);
    assert!(minter.prompter().rejections.is_empty());
    assert_eq!(log.setups.load(Ordering::SeqCst), 0);
    assert!(log.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_confirmation_aborts_set_roles() {
    let (mut minter, log) = minter(&[""], None);

    let outcome = minter.run(MinterCommand::SetRoles).await;

    assert!(matches!(outcome, FlowOutcome::Aborted));
    assert_eq!(minter.prompter().asked.len(), 1);
    assert!(log.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_issue_collection_token_sends_one_transaction() {
    let (mut minter, log) = minter(&["MyToken1", "MYTOKEN1", "y"], None);

    let outcome = minter.run(MinterCommand::IssueCollectionToken).await;

    match outcome {
        FlowOutcome::Submitted(result) => assert_eq!(result.hash, TxHash("c0ffee".to_string())),
        other => panic!("unexpected outcome: {:?}", other),
    }
    let sent = log.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].receiver.as_str(), CONTRACT);
    assert_eq!(sent[0].nonce, 11);
    assert_eq!(sent[0].gas_limit, 60_000_000);
    assert_eq!(sent[0].value.to_string(), "50000000000000000");
    assert_eq!(
        sent[0].decoded_data().as_deref(),
        Some(format!("issueToken@{}@{}", hex::encode("MyToken1"), hex::encode("MYTOKEN1")).as_str())
    );
}

#[tokio::test]
async fn test_create_passes_all_eight_values_in_order() {
    let (mut minter, log) = minter(
        &[
            "Concert",
            "0.5",
            "bafyCID",
            "meta.json",
            "1000",
            "5.5",
            "art,sft",
            "ipfs://a",
            "yes",
        ],
        None,
    );

    let outcome = minter.create().await;

    assert!(matches!(outcome, FlowOutcome::Submitted(_)));
    assert_eq!(log.setups.load(Ordering::SeqCst), 1);

    let sent = log.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].gas_limit, 20_000_000);
    assert_eq!(sent[0].value.to_string(), "0");

    let expected = [
        "createToken".to_string(),
        hex::encode("Concert"),
        "06f05b59d3b20000".to_string(),
        hex::encode("bafyCID"),
        hex::encode("meta.json"),
        "03e8".to_string(),
        "0226".to_string(),
        hex::encode("art,sft"),
        hex::encode("ipfs://a"),
    ]
    .join("@");
    assert_eq!(sent[0].decoded_data(), Some(expected));
}

#[tokio::test]
async fn test_create_reprompts_invalid_numbers() {
    let (mut minter, log) = minter(
        &[
            "Concert", "-1", "0.5", "bafyCID", "meta.json", "0", "1000", "101", "", "art",
            "", "ipfs://a", "y",
        ],
        None,
    );

    let outcome = minter.create().await;

    assert!(matches!(outcome, FlowOutcome::Submitted(_)));
    assert_eq!(
        minter.prompter().rejections,
        vec![
            "Required and greater than 0!",
            "Required whole number, min 1!",
            "Should be a number in range 0-100",
            "Requires at least one address!",
        ]
    );
    let data = log.sent.lock().unwrap()[0].decoded_data().unwrap();
    // omitted royalties
    assert!(data.contains(&format!("@03e8@@{}@", hex::encode("art"))));
}

#[tokio::test]
async fn test_create_reprompts_prices_that_do_not_fit_the_denomination() {
    let (mut minter, log) = minter(
        &[
            "Concert",
            "0.0000000000000000001",
            "1000000000000000000000",
            "0.000000000000000001",
            "bafyCID",
            "meta.json",
            "1",
            "",
            "art",
            "ipfs://a",
            "y",
        ],
        None,
    );

    let outcome = minter.create().await;

    assert!(matches!(outcome, FlowOutcome::Submitted(_)));
    assert_eq!(
        minter.prompter().rejections,
        vec!["Required and greater than 0!", "Required and greater than 0!"]
    );
    let data = log.sent.lock().unwrap()[0].decoded_data().unwrap();
    // one smallest unit
    assert!(data.starts_with(&format!("createToken@{}@01@", hex::encode("Concert"))));
}

#[tokio::test]
async fn test_submission_error_is_reported_without_retry() {
    let (mut minter, log) = minter(&["y"], Some("insufficient funds"));

    let outcome = minter.set_roles().await;

    match &outcome {
        FlowOutcome::Failed(message) => assert!(message.contains("insufficient funds")),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(log.sent.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unresolvable_contract_fails_before_session() {
    let log = NetworkLog::default();
    let setup = StubSetup {
        log: log.clone(),
        send_error: None,
    };
    let mut minter = SftMinter::new(ScriptedPrompter::new(&["y"]), FixedResolver(None), setup);

    let outcome = minter.set_roles().await;

    match outcome {
        FlowOutcome::Failed(message) => assert!(message.contains("no contract deployed")),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(log.setups.load(Ordering::SeqCst), 0);
}
