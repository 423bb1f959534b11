//! Broadcast delegation against a stub node.

use async_trait::async_trait;

use keel_identity::{AccountFactory, Network};
use keel_tx::{AnyTransaction, CancelSponsor, NodeError, PublicNode, RevokeAssociation, Transaction, TxError};

/// Node stub that accepts everything and assigns an id, like a real node
/// answering a broadcast.
struct AcceptingNode {
    id: &'static str,
}

#[async_trait]
impl PublicNode for AcceptingNode {
    async fn broadcast(&self, mut transaction: AnyTransaction) -> Result<AnyTransaction, NodeError> {
        transaction.common_mut().id = Some(self.id.to_string());
        Ok(transaction)
    }
}

/// Node stub that rejects everything.
struct RejectingNode;

#[async_trait]
impl PublicNode for RejectingNode {
    async fn broadcast(&self, _transaction: AnyTransaction) -> Result<AnyTransaction, NodeError> {
        Err(NodeError::Rejected("insufficient fee".to_string()))
    }
}

fn signed_revocation() -> RevokeAssociation {
    let account = AccountFactory::with_nonce(Network::Testnet, 0).seed("broadcast test");
    let party = "3N3Cn2pYtqzj7N9pviSesNe8KG9Cmb718Y1".parse().unwrap();

    let mut tx = RevokeAssociation::new(party, 1);
    tx.sign_with(&account).unwrap();
    tx
}

#[tokio::test]
async fn broadcast_returns_the_nodes_transaction() {
    let node = AcceptingNode {
        id: "UMkS6oU6GfhhZngST6opVQYvCbLMnWVL4q6SC46F7ch",
    };

    let tx = signed_revocation();
    let before = tx.clone();

    let confirmed = tx.broadcast_to(&node).await.unwrap();

    assert_eq!(
        confirmed.common().id.as_deref(),
        Some("UMkS6oU6GfhhZngST6opVQYvCbLMnWVL4q6SC46F7ch")
    );
    // Everything except the node-assigned id is untouched.
    assert_eq!(confirmed.common().proofs, before.common().proofs);
    assert_eq!(confirmed.common().timestamp, before.common().timestamp);
}

#[tokio::test]
async fn broadcast_propagates_node_failure() {
    let tx = signed_revocation();

    let err = tx.broadcast_to(&RejectingNode).await.unwrap_err();
    assert_eq!(
        err,
        TxError::Node(NodeError::Rejected("insufficient fee".to_string()))
    );
}

#[tokio::test]
async fn broadcast_response_of_wrong_type_is_rejected() {
    /// A misbehaving node that answers with a different transaction type.
    struct WrongTypeNode;

    #[async_trait]
    impl PublicNode for WrongTypeNode {
        async fn broadcast(&self, _tx: AnyTransaction) -> Result<AnyTransaction, NodeError> {
            let recipient = "3N3Cn2pYtqzj7N9pviSesNe8KG9Cmb718Y1".parse().unwrap();
            Ok(CancelSponsor::new(recipient).into())
        }
    }

    let tx = signed_revocation();
    let err = tx.broadcast_to(&WrongTypeNode).await.unwrap_err();
    assert_eq!(err, TxError::UnexpectedResponse);
}
