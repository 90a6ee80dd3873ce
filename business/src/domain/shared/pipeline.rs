use async_trait::async_trait;

/// One step of a pipeline: consumes the previous step's output and
/// produces the next step's input.
#[async_trait]
pub trait Stage<I>: Send + Sync
where
    I: Send + 'static,
{
    type Output: Send + 'static;
    type Error: Send;

    async fn run(&self, input: I) -> Result<Self::Output, Self::Error>;

    /// Chains `next` after this stage. The chain stops at the first error.
    fn then<N>(self, next: N) -> Chain<Self, N>
    where
        Self: Sized,
        N: Stage<Self::Output, Error = Self::Error>,
    {
        Chain {
            first: self,
            second: next,
        }
    }
}

/// Two stages run strictly in sequence.
pub struct Chain<A, B> {
    first: A,
    second: B,
}

#[async_trait]
impl<I, A, B> Stage<I> for Chain<A, B>
where
    I: Send + 'static,
    A: Stage<I>,
    B: Stage<A::Output, Error = A::Error>,
{
    type Output = B::Output;
    type Error = A::Error;

    async fn run(&self, input: I) -> Result<Self::Output, Self::Error> {
        let intermediate = self.first.run(input).await?;
        self.second.run(intermediate).await
    }
}
