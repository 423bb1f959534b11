//! End-to-end flow: derive an identity, build an event chain, sign a
//! transaction, and broadcast it to a stub node.

use async_trait::async_trait;

use keel::prelude::*;
use keel::{NodeError, TxError};
use keel_testkit::fixtures::{TestEvent, TestFixture};

struct StubNode;

#[async_trait]
impl PublicNode for StubNode {
    async fn broadcast(&self, mut transaction: AnyTransaction) -> Result<AnyTransaction, NodeError> {
        if !transaction.is_signed() {
            return Err(NodeError::Rejected("unsigned transaction".into()));
        }
        let common = transaction.common_mut();
        common.id = Some("4fhm1GDvhVS1UMkS6oU6GfhhZngST6opVQYvCbLMnWVL".into());
        common.height = Some(1_221_474);
        Ok(transaction)
    }
}

#[tokio::test]
async fn identity_chain_and_transaction_flow() {
    tracing_subscriber::fmt().with_test_writer().try_init().ok();

    // Identity
    let fixture = TestFixture::new();
    let account = &fixture.account;

    // Event chain bound to the identity
    let mut chain: EventChain<TestEvent> = account.create_event_chain(Some(b"workflow")).unwrap();
    let anchor = chain.latest_hash().unwrap();

    account
        .sign_event(chain.add(TestEvent::new(&b"project started"[..], 1519862400000)))
        .unwrap();
    account
        .sign_event(chain.add(TestEvent::new(&b"terms accepted"[..], 1519862460000)))
        .unwrap();

    let events = chain.events();
    assert_eq!(events[0].previous, Some(anchor));
    assert_eq!(events[1].previous, Some(events[0].hash()));
    assert_eq!(chain.latest_hash(), Some(events[1].hash()));

    // Transaction signed by the same identity
    let party: Address = "3N3Cn2pYtqzj7N9pviSesNe8KG9Cmb718Y1".parse().unwrap();
    let mut tx = RevokeAssociation::new(party, 42);
    tx.common_mut().timestamp = Some(1519862400);
    tx.sign_with(account).unwrap();

    // Broadcast; the node's copy comes back confirmed
    let confirmed = tx.broadcast_to(&StubNode).await.unwrap();
    assert_eq!(
        confirmed.common().id.as_deref(),
        Some("4fhm1GDvhVS1UMkS6oU6GfhhZngST6opVQYvCbLMnWVL")
    );
    assert_eq!(confirmed.common().height, Some(1_221_474));

    // The confirmed transaction round-trips through interchange data.
    let rebuilt = RevokeAssociation::from_data(&confirmed.json_serialize()).unwrap();
    assert_eq!(rebuilt, confirmed);
}

#[tokio::test]
async fn unsigned_transaction_is_rejected_by_the_node() {
    let party: Address = "3N3Cn2pYtqzj7N9pviSesNe8KG9Cmb718Y1".parse().unwrap();
    let mut tx = RevokeAssociation::new(party, 42);
    tx.common_mut().timestamp = Some(1519862400);
    let account = TestFixture::new().account;
    tx.common_mut().sender = Some(*account.address());
    tx.common_mut().sender_public_key = account.public_sign_key().copied();

    let err = tx.broadcast_to(&StubNode).await.unwrap_err();
    assert_eq!(
        err,
        TxError::Node(NodeError::Rejected("unsigned transaction".into()))
    );
}
