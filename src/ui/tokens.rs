//! 设计令牌：令牌标识 → 工具类字符串（静态配置）

use serde::Serialize;

/// 生成令牌枚举：ALL 列表 + class() 查表
macro_rules! token_table {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $class:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn class(self) -> &'static str {
                match self {
                    $($name::$variant => $class),+
                }
            }
        }
    };
}

token_table! {
    /// 圆角
    RadiusToken {
        Xs => "rounded-xs",
        Sm => "rounded-sm",
        Md => "rounded-md",
        Lg => "rounded-lg",
        Xl => "rounded-xl",
        Pill => "rounded-full",
        Panel => "rounded-2xl",
    }
}

token_table! {
    /// 内边距
    SpacingToken {
        Xs => "p-2",
        Sm => "p-3",
        Md => "p-4",
        Lg => "p-6",
        Xl => "p-8",
    }
}

token_table! {
    /// 阴影
    ShadowToken {
        Soft => "shadow-sm",
        Floating => "shadow-[0_25px_65px_-25px_rgba(15,23,42,0.45)]",
    }
}

token_table! {
    /// 表面底色
    SurfaceToken {
        Primary => "bg-white text-neutral-800",
        Muted => "bg-neutral-50/80 text-neutral-500",
    }
}

token_table! {
    /// 边框
    BorderToken {
        Base => "border border-border",
        Subtle => "border border-border/70",
    }
}

token_table! {
    /// 过渡动画
    TransitionToken {
        Soft => "transition duration-200 ease-out",
    }
}
