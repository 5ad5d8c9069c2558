use crate::config::constants::{
    ASSIGN_ROLES_SFT_MINTER_GAS_LIMIT, CREATE_SFT_MINTER_GAS_LIMIT, ISSUE_SFT_MINTER_GAS_LIMIT,
    ISSUE_SFT_MINTER_VALUE,
};
use crate::core::dispatch::MinterCommand;
use crate::core::fields::{
    CreateSftArgs, IssueCollectionArgs, CREATE_SFT_FIELDS, ISSUE_COLLECTION_FIELDS,
};
use crate::core::prompt::{self, Answers, FieldSpec};
use crate::core::{pipeline, transactions};
use crate::domain::model::{Balance, SmartContract, TransactionOutcome, TransactionPayload};
use crate::domain::ports::{ContractAddressResolver, Prompter, SessionSetup};
use crate::utils::error::Result;

#[derive(Debug)]
pub enum FlowOutcome {
    Submitted(TransactionOutcome),
    /// Input ended or the operator did not confirm. Nothing was sent.
    Aborted,
    /// Printed error message; the flow is not retried.
    Failed(String),
}

impl FlowOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            FlowOutcome::Submitted(_) | FlowOutcome::Aborted => 0,
            FlowOutcome::Failed(_) => 1,
        }
    }
}

/// Runs one interactive flow per subcommand:
/// prompts, confirmation, session, build, submit.
pub struct SftMinter<P, R, S> {
    prompter: P,
    resolver: R,
    setup: S,
}

impl<P, R, S> SftMinter<P, R, S>
where
    P: Prompter,
    R: ContractAddressResolver,
    S: SessionSetup,
{
    pub fn new(prompter: P, resolver: R, setup: S) -> Self {
        Self {
            prompter,
            resolver,
            setup,
        }
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub async fn run(&mut self, command: MinterCommand) -> FlowOutcome {
        tracing::info!("Running {}", command);
        match command {
            MinterCommand::IssueCollectionToken => self.issue_collection_token().await,
            MinterCommand::SetRoles => self.set_roles().await,
            MinterCommand::Create => self.create().await,
        }
    }

    /// Issues the collection token the SFTs are minted under.
    pub async fn issue_collection_token(&mut self) -> FlowOutcome {
        self.execute(&ISSUE_COLLECTION_FIELDS, |answers, contract| {
            let args = IssueCollectionArgs::from_answers(answers)?;
            Ok(transactions::issue_collection_transaction(
                contract,
                ISSUE_SFT_MINTER_GAS_LIMIT,
                Balance::from_egld(ISSUE_SFT_MINTER_VALUE)?,
                &args.token_name,
                &args.token_ticker,
            ))
        })
        .await
    }

    /// Only asks for confirmation; the call has no arguments.
    pub async fn set_roles(&mut self) -> FlowOutcome {
        self.execute(&[], |_, contract| {
            Ok(transactions::assign_roles_transaction(
                contract,
                ASSIGN_ROLES_SFT_MINTER_GAS_LIMIT,
            ))
        })
        .await
    }

    /// Mints a new SFT under the issued collection.
    pub async fn create(&mut self) -> FlowOutcome {
        self.execute(&CREATE_SFT_FIELDS, |answers, contract| {
            let args = CreateSftArgs::from_answers(answers)?;
            Ok(transactions::create_sft_transaction(
                contract,
                CREATE_SFT_MINTER_GAS_LIMIT,
                &args.display_name,
                Balance::from_egld(&args.selling_price)?,
                &args.metadata_ipfs_cid,
                &args.metadata_ipfs_file_name,
                args.initial_supply,
                args.royalties,
                &args.tags,
                &args.uris,
            ))
        })
        .await
    }

    async fn execute<F>(&mut self, fields: &[FieldSpec], build: F) -> FlowOutcome
    where
        F: FnOnce(&Answers, &SmartContract) -> Result<TransactionPayload>,
    {
        match self.try_execute(fields, build).await {
            Ok(Some(outcome)) => FlowOutcome::Submitted(outcome),
            Ok(None) => {
                tracing::info!("Aborted before anything was sent");
                FlowOutcome::Aborted
            }
            Err(e) => {
                // 只回報一次，不重試
                tracing::error!("Flow failed: {}", e);
                tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());
                eprintln!("❌ {}", e);
                FlowOutcome::Failed(e.to_string())
            }
        }
    }

    async fn try_execute<F>(
        &mut self,
        fields: &[FieldSpec],
        build: F,
    ) -> Result<Option<TransactionOutcome>>
    where
        F: FnOnce(&Answers, &SmartContract) -> Result<TransactionPayload>,
    {
        // 逐欄詢問，輸入結束即中止
        let Some(answers) = prompt::collect(&mut self.prompter, fields)? else {
            return Ok(None);
        };
        // 最後確認，未確認則不送出任何東西
        if !prompt::confirm(&mut self.prompter)? {
            return Ok(None);
        }

        // 取得合約地址並建立連線
        let address = self.resolver.resolve()?;
        let mut session = self.setup.setup(&address).await?;
        // 組裝交易內容
        let payload = build(&answers, &session.contract)?;

        // 簽名、送出並等待結果
        println!("Processing the transaction...");
        let outcome = pipeline::submit(
            payload,
            &mut session.account,
            session.signer.as_ref(),
            session.provider.as_ref(),
        )
        .await?;

        println!("✅ Transaction completed");
        println!("Transaction link: {}", session.transaction_link(&outcome.hash));
        Ok(Some(outcome))
    }
}
