use std::sync::Mutex;

use async_trait::async_trait;
use aws_sdk_s3::operation::copy_object::{
    builders::CopyObjectInputBuilder, CopyObjectError, CopyObjectOutput,
};
use aws_sdk_s3::types::error::ObjectNotInActiveTierError;

use s3copy::errors::BoxError;
use s3copy::CopyObjectClient;

/// Stands in for S3: replies with a canned output or a canned service error, and keeps
/// every input it was given.
pub struct MockClient {
    reply: Reply,
    seen: Mutex<Vec<CopyObjectInputBuilder>>,
}

enum Reply {
    Output(CopyObjectOutput),
    NotInActiveTier(&'static str),
}

impl MockClient {
    pub fn replying(output: CopyObjectOutput) -> MockClient {
        MockClient {
            reply: Reply::Output(output),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &'static str) -> MockClient {
        MockClient {
            reply: Reply::NotInActiveTier(message),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<CopyObjectInputBuilder> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CopyObjectClient for MockClient {
    async fn copy_object(
        &self,
        input: CopyObjectInputBuilder,
    ) -> std::result::Result<CopyObjectOutput, BoxError> {
        self.seen.lock().unwrap().push(input);
        match &self.reply {
            Reply::Output(output) => Ok(output.clone()),
            Reply::NotInActiveTier(message) => Err(CopyObjectError::ObjectNotInActiveTierError(
                ObjectNotInActiveTierError::builder()
                    .message(*message)
                    .build(),
            )
            .into()),
        }
    }
}
