//! ユーザー登録・ログインユースケース

use std::sync::Arc;

use todoflow_domain::user::{AccessToken, AccountNumber, UserName};
use todoflow_infra::TodoStore;

use crate::error::ApiError;

/// ユーザー登録・ログインユースケース
pub struct UserUseCaseImpl {
   store: Arc<dyn TodoStore>,
}

impl UserUseCaseImpl {
   pub fn new(store: Arc<dyn TodoStore>) -> Self {
      Self { store }
   }

   /// ユーザーを登録する
   ///
   /// 名前は英数字と空白の 5〜32 文字。重複は許可する。
   pub async fn register(&self, name: String) -> Result<AccountNumber, ApiError> {
      let name = UserName::new(name)?;
      let account_number = self.store.register_user(name).await;

      tracing::info!(account_number = %account_number, "ユーザーを登録しました");
      Ok(account_number)
   }

   /// アクセストークンを発行する
   ///
   /// 発行済みのトークンは無効化しない。
   pub async fn login(&self, account_number: &str) -> Result<AccessToken, ApiError> {
      let token = self.store.login(account_number).await?;

      tracing::info!(account_number, "ログインしました");
      Ok(token)
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::{fixture, rstest};
   use todoflow_infra::InMemoryTodoStore;

   use super::*;

   #[fixture]
   fn store() -> Arc<InMemoryTodoStore> {
      Arc::new(InMemoryTodoStore::new())
   }

   fn bad_request(error: ApiError) -> String {
      match error {
         ApiError::BadRequest(msg) => msg,
         other => panic!("BadRequest を期待しましたが {other:?} でした"),
      }
   }

   #[rstest]
   #[tokio::test]
   async fn test_登録したユーザーはストアに保存される(store: Arc<InMemoryTodoStore>) {
      let sut = UserUseCaseImpl::new(store.clone());

      let account = sut.register("Alice Smith".to_string()).await.unwrap();

      let user = store.find_user(&account).await.unwrap();
      assert_eq!(user.name().as_str(), "Alice Smith");
   }

   #[rstest]
   #[case("Bob")]
   #[case("Alice!")]
   #[case("")]
   #[tokio::test]
   async fn test_不正な名前は登録できない(store: Arc<InMemoryTodoStore>, #[case] name: &str) {
      let sut = UserUseCaseImpl::new(store);

      let error = sut.register(name.to_string()).await.unwrap_err();

      assert_eq!(bad_request(error), "invalid user name");
   }

   #[rstest]
   #[tokio::test]
   async fn test_ログインで発行したトークンで認可できる(store: Arc<InMemoryTodoStore>) {
      let sut = UserUseCaseImpl::new(store.clone());
      let account = sut.register("Alice".to_string()).await.unwrap();

      let token = sut.login(account.as_str()).await.unwrap();

      assert_eq!(store.authorize(token.as_str()).await.unwrap(), account);
   }

   #[rstest]
   #[case("12345", "invalid account number")]
   #[case("f2d869a8-e5bc-4fbf-ad71-000000000000", "account not found")]
   #[tokio::test]
   async fn test_不正なアカウント番号ではログインできない(
      store: Arc<InMemoryTodoStore>,
      #[case] account_number: &str,
      #[case] expected: &str,
   ) {
      let sut = UserUseCaseImpl::new(store);

      let error = sut.login(account_number).await.unwrap_err();

      assert_eq!(bad_request(error), expected);
   }
}
