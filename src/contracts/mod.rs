//! On-chain interfaces.
//!
//! Bindings are generated with `sol!`; the structs here are the wire layout
//! the lens returns and the router consumes, shared between the two so a
//! quote can be forwarded without any conversion.

use alloy::sol;

sol! {
    #![sol(all_derives = true)]
    #![sol(rpc)]

    /// One hop-chain swap leg. `swapType` selects the AMM protocol variant
    /// (0 = UniV2-style router).
    struct SwapPath {
        address swapRouter;
        uint8 swapType;
        address[] path;
        uint256 amountOutMin;
        uint256 amountOut;
    }

    /// Final pool-deposit step of a zap. `lpType` selects the pool variant
    /// (0 = UniV2-style pair).
    struct LiquidityPath {
        address lpRouter;
        uint8 lpType;
        uint256 minAmountLP0;
        uint256 minAmountLP1;
        uint256 lpAmount;
    }

    /// Parameters for a plain swap through the router.
    struct SwapParams {
        address tokenIn;
        uint256 amountIn;
        address tokenOut;
        SwapPath path;
        address to;
        uint256 deadline;
    }

    /// Parameters for a swap-into-liquidity zap.
    struct ZapParams {
        address tokenIn;
        uint256 amountIn;
        address token0;
        address token1;
        SwapPath path0;
        SwapPath path1;
        LiquidityPath liquidityPath;
        address to;
        uint256 deadline;
    }

    /// Bond-specific extension forwarded unchanged to `zapBond`.
    struct BondParams {
        address bond;
        uint256 maxPrice;
    }

    /// Read-only routing oracle. Computes a candidate route and its expected
    /// price impact without mutating state.
    interface IZapLens {
        function getSwapData(
            address tokenIn,
            uint256 amountIn,
            address tokenOut,
            uint256 slippage,
            address to,
            uint256 deadlineOffset
        )
            external
            view
            returns (
                bytes encodedTx,
                SwapParams swapParams,
                SwapPath feeSwapPath,
                uint256 priceImpactPercentage
            );

        function getZapData(
            address tokenIn,
            uint256 amountIn,
            address tokenOut,
            uint256 slippage,
            address to,
            uint256 deadlineOffset
        )
            external
            view
            returns (
                bytes encodedTx,
                ZapParams zapParams,
                SwapPath feeSwapPath,
                uint256[] priceImpactPercentages
            );

        function getZapDataBond(
            address tokenIn,
            uint256 amountIn,
            address bond,
            uint256 slippage,
            address to,
            uint256 deadlineOffset
        )
            external
            view
            returns (
                bytes encodedTx,
                ZapParams zapParams,
                SwapPath feeSwapPath,
                uint256[] priceImpactPercentages,
                BondParams bondParams
            );
    }

    /// State-changing execution contract. Native value must accompany a call
    /// exactly when `tokenIn` is the native sentinel.
    interface IZapRouter {
        function swap(SwapParams swapParams, SwapPath feeSwapPath) external payable;

        function zap(ZapParams zapParams, SwapPath feeSwapPath) external payable;

        function zapBond(
            ZapParams zapParams,
            SwapPath feeSwapPath,
            address bond,
            uint256 maxPrice
        ) external payable;
    }
}

sol! {
    #![sol(rpc)]

    /// Read-only USD price oracle. Unit prices are 1e18 fixed-point.
    interface IPriceGetter {
        function getPriceFromFactory(
            address token,
            uint8 protocol,
            address factory,
            address overrideA,
            address overrideB
        ) external view returns (uint256 price);

        function getLPPriceFromFactory(
            address lpToken,
            uint8 protocol,
            address factory,
            address overrideA,
            address overrideB
        ) external view returns (uint256 price);
    }
}

sol! {
    #![sol(all_derives = true)]
    #![sol(rpc)]

    /// Canonical Multicall3, used to batch independent price reads into one
    /// round trip.
    interface IMulticall3 {
        struct Call {
            address target;
            bytes callData;
        }

        struct Result {
            bool success;
            bytes returnData;
        }

        function tryAggregate(bool requireSuccess, Call[] calldata calls)
            external
            payable
            returns (Result[] memory returnData);
    }
}
